//! Async task bookkeeping.
//!
//! Every spawned request gets a fresh [`TaskId`]. The reducer records the
//! active id per [`TaskKind`] and ignores completions whose id is no longer
//! the active one, so a response from a superseded request can never stomp
//! the state produced by a newer one.

/// Unique id for one spawned request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Monotonic id generator, owned by the app state.
#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// The five request kinds the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    ArticlesList,
    ArticleCreate,
    ArticleUpdate,
    ArticleDelete,
}

/// Notification that a task was spawned.
#[derive(Debug, Clone, Copy)]
pub struct TaskStarted {
    pub id: TaskId,
}

/// A finished task with its result event.
#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Lifecycle state for one task kind (mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: TaskStarted) {
        self.active = Some(started.id);
    }

    /// Clears the active id if it matches. Returns false for stale
    /// completions, which the reducer must drop.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub articles_list: TaskState,
    pub article_create: TaskState,
    pub article_update: TaskState,
    pub article_delete: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::ArticlesList => &mut self.articles_list,
            TaskKind::ArticleCreate => &mut self.article_create,
            TaskKind::ArticleUpdate => &mut self.article_update,
            TaskKind::ArticleDelete => &mut self.article_delete,
        }
    }

    /// Whether any request is in flight. This is the status line's busy flag.
    pub fn is_any_running(&self) -> bool {
        self.login.is_running()
            || self.articles_list.is_running()
            || self.article_create.is_running()
            || self.article_update.is_running()
            || self.article_delete.is_running()
    }
}
