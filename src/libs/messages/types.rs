#[derive(Debug, Clone)]
pub enum Message {
    // === FOCUS SESSION MESSAGES ===
    FocusSessionStarting(u64),       // planned minutes
    FocusSessionCompleted(u64),      // actual minutes
    FocusSessionCancelled(u64),      // minutes worked before cancellation
    FocusBreakStarted(u64),          // break length in minutes
    FocusBreakEnded,
    FocusNotificationTitle,
    FocusNotificationBody(u64), // minutes
    NotificationFailed(String),

    // === FOCUS STATS MESSAGES ===
    FocusStatsHeader(String), // range label
    NoFocusSessions(String),  // range label

    // === TODO MESSAGES ===
    TodoAdded(String),
    TodoCompleted(String),
    TodoUpdated(String),
    TodoRescheduled(String, String), // task, next due date
    TodoDeleted(String),
    TodoStatusUpdated(String, String), // task, status
    TodoNotFound(u64),
    NoTodosFound,
    TodosHeader,
    ConfirmDeleteTodo(String),
    NoTodosMatchingQuery(String),

    // === TIMETRACK MESSAGES ===
    SheetCreated(String),
    SheetSwitched(String),
    SheetNotFound(String),
    NoSheets,
    NoCurrentSheet,
    CheckedIn(String),            // sheet name
    CheckedOut(String, String),   // sheet name, duration
    NoRunningEntry(String),       // sheet name
    RunningEntryExists(String),   // sheet name
    TimesheetHeader(String),      // sheet name
    NoEntriesForSheet(String),    // sheet name
    SheetsHeader,
    RunningEntriesHeader,
    NoRunningEntries,

    // === LEARNING MESSAGES ===
    ProblemAdded(String, String), // name, platform
    ProblemUpdated(String),
    ProblemNotFound(String),
    NoProblemsFound,
    ProblemsHeader,
    LearningStatsHeader,
    OpeningProblem(String), // url
    ProblemMissingUrl(String),
    ProblemAdditionCancelled,

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String),   // week label
    DashboardOpenTodos(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    PromptDefaultSessionMinutes,
    PromptBreakEvery,
    PromptBreakDuration,
    PromptNotificationsEnabled,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    InvalidDateFormat(String),
    InvalidTimeFormat(String),
}
