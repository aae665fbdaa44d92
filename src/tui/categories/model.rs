//! Headless state for the category management screen
//!
//! `CategoryScreen` owns everything the view renders. At most one dialog
//! is open at a time, which is enforced by `Dialog` being a single enum
//! rather than a set of independent flags. Transitions that need the
//! gateway return an [`Effect`]; outcomes come back through
//! [`CategoryScreen::resolve`].

use crate::error::{CatmanError, Result};
use crate::tui::components::Toast;
use crate::types::{Capability, Category, CategoryDraft, Role};

use super::effects::{Effect, Outcome};
use super::filter::filter_categories;

/// Which dialog is open. The record carried by `Editing`, `Viewing` and
/// `ConfirmingDelete` is the currently selected record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Idle,
    Composing,
    Editing(Category),
    Viewing(Category),
    ConfirmingDelete(Category),
}

impl Dialog {
    /// The record the dialog is about, if any
    pub fn selected(&self) -> Option<&Category> {
        match self {
            Dialog::Editing(c) | Dialog::Viewing(c) | Dialog::ConfirmingDelete(c) => Some(c),
            Dialog::Idle | Dialog::Composing => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Idle)
    }

    /// Whether the add/edit form is showing
    pub fn is_form(&self) -> bool {
        matches!(self, Dialog::Composing | Dialog::Editing(_))
    }
}

/// Focused control in the add/edit form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Code,
    Name,
    Kind,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Code => FormField::Name,
            FormField::Name => FormField::Kind,
            FormField::Kind => FormField::Code,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Code => FormField::Kind,
            FormField::Name => FormField::Code,
            FormField::Kind => FormField::Name,
        }
    }
}

/// Search box contents and focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchUi {
    pub query: String,
    pub focused: bool,
}

/// Highlighted row and scroll position of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub index: usize,
    pub offset: usize,
    /// Rows that fit on screen; kept in sync by the view
    pub height: usize,
}

impl Default for ListCursor {
    fn default() -> Self {
        Self {
            index: 0,
            offset: 0,
            height: 10,
        }
    }
}

impl ListCursor {
    fn rows(&self) -> usize {
        self.height.max(1)
    }

    pub fn down(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.index = (self.index + 1).min(count - 1);
        if self.index >= self.offset + self.rows() {
            self.offset = self.index + 1 - self.rows();
        }
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
        if self.index < self.offset {
            self.offset = self.index;
        }
    }

    pub fn top(&mut self) {
        self.index = 0;
        self.offset = 0;
    }

    pub fn bottom(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.index = count - 1;
        self.offset = count.saturating_sub(self.rows());
    }

    /// Keep the cursor inside a list that may have shrunk
    pub fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.top();
            return;
        }
        self.index = self.index.min(count - 1);
        self.offset = self.offset.min(self.index);
        if self.index >= self.offset + self.rows() {
            self.offset = self.index + 1 - self.rows();
        }
    }
}

/// Everything the user can ask the screen to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Search
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    ExitSearch,
    ClearSearchAndExit,

    // Dialogs, acting on the highlighted row
    OpenAdd,
    OpenEdit,
    OpenView,
    OpenDelete,
    CloseDialog,

    // Form
    FormInput(char),
    FormBackspace,
    NextField,
    PrevField,
    CycleKind,
    Submit,

    // Confirmation
    ConfirmDelete,

    Refresh,
    DismissToast,
    Quit,
}

/// State of the category management screen
#[derive(Debug, Clone, Default)]
pub struct CategoryScreen {
    /// Last list returned by the gateway, in server order
    pub categories: Vec<Category>,
    pub search: SearchUi,
    pub dialog: Dialog,
    /// Bumped each time a dialog opens; mutation outcomes only touch the
    /// dialog whose number they carry
    pub dialog_seq: u64,
    /// Working copy edited by the add/edit form
    pub draft: CategoryDraft,
    pub form_field: FormField,
    /// Validation or server message shown inside the form
    pub form_error: Option<String>,
    pub cursor: ListCursor,
    pub role: Role,
    pub toast: Option<Toast>,
    /// A list fetch is in flight
    pub loading: bool,
    /// A create, update or delete is in flight
    pub saving: bool,
    pub should_exit: bool,
}

impl CategoryScreen {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    /// Records matching the current search, in server order
    pub fn visible(&self) -> Vec<&Category> {
        filter_categories(&self.categories, &self.search.query)
    }

    /// Row under the list cursor
    pub fn highlighted(&self) -> Option<&Category> {
        self.visible().get(self.cursor.index).copied()
    }

    /// The record the open dialog refers to
    pub fn selected_record(&self) -> Option<&Category> {
        self.dialog.selected()
    }

    pub fn set_list_height(&mut self, height: usize) {
        self.cursor.height = height;
        let count = self.visible().len();
        self.cursor.clamp(count);
    }

    /// Replace the search term. The record list itself is untouched.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
        self.cursor.top();
    }

    /// Begin fetching the list
    pub fn start_load(&mut self) -> Effect {
        self.loading = true;
        Effect::Reload
    }

    /// Open an empty add form
    pub fn open_add(&mut self) {
        self.reset_form();
        self.show(Dialog::Composing);
    }

    /// Open the edit form pre-filled from record `id`
    pub fn open_edit(&mut self, id: u64) -> Result<()> {
        let result = self.role.require(Capability::Edit).and_then(|_| self.find(id));
        let record = self.surface(result)?;
        self.reset_form();
        self.draft = CategoryDraft::from(&record);
        self.show(Dialog::Editing(record));
        Ok(())
    }

    /// Open the read-only detail view. Any role may do this.
    pub fn open_view(&mut self, id: u64) -> Result<()> {
        let result = self.find(id);
        let record = self.surface(result)?;
        self.show(Dialog::Viewing(record));
        Ok(())
    }

    /// Ask for confirmation before deleting record `id`
    pub fn open_delete(&mut self, id: u64) -> Result<()> {
        let result = self
            .role
            .require(Capability::Delete)
            .and_then(|_| self.find(id));
        let record = self.surface(result)?;
        self.show(Dialog::ConfirmingDelete(record));
        Ok(())
    }

    /// Close whatever dialog is open, discarding any unsaved draft
    pub fn close_dialog(&mut self) {
        if self.dialog.is_form() {
            self.reset_form();
        }
        self.dialog = Dialog::Idle;
    }

    /// Validate the form and produce the matching create or update call.
    /// On a validation failure the form stays open with the message shown.
    pub fn submit(&mut self) -> Result<Effect> {
        let effect = match &self.dialog {
            Dialog::Composing => self.draft.validate().map(|_| Effect::Create {
                draft: self.draft.clone(),
                dialog: self.dialog_seq,
            }),
            Dialog::Editing(record) => self.draft.validate().map(|_| Effect::Update {
                id: record.id,
                patch: self.draft.to_patch(),
                dialog: self.dialog_seq,
            }),
            _ => Err(CatmanError::Other("no form is open".to_string())),
        };

        match effect {
            Ok(effect) => {
                self.form_error = None;
                self.saving = true;
                Ok(effect)
            }
            Err(e) => {
                if self.dialog.is_form() {
                    self.form_error = Some(e.to_string());
                }
                self.surface(Err(e))
            }
        }
    }

    /// Produce the delete call for the record awaiting confirmation
    pub fn confirm_delete(&mut self) -> Result<Effect> {
        let result = match &self.dialog {
            Dialog::ConfirmingDelete(record) => self
                .role
                .require(Capability::Delete)
                .map(|_| Effect::Delete {
                    id: record.id,
                    dialog: self.dialog_seq,
                }),
            _ => Err(CatmanError::Other("nothing to delete".to_string())),
        };
        let effect = self.surface(result)?;
        self.saving = true;
        Ok(effect)
    }

    /// Apply the outcome of a gateway call. A successful mutation closes
    /// its dialog, if that dialog is still the one open, and asks for a
    /// reload.
    pub fn resolve(&mut self, outcome: Outcome) -> Option<Effect> {
        match outcome {
            Outcome::Loaded(Ok(categories)) => {
                tracing::debug!("loaded {} categories", categories.len());
                self.loading = false;
                self.categories = categories;
                let count = self.visible().len();
                self.cursor.clamp(count);
                None
            }
            Outcome::Loaded(Err(e)) => {
                tracing::warn!("category list failed: {e}");
                self.loading = false;
                let message = if e.is_remote() {
                    format!("Could not reach the category service: {e}")
                } else {
                    format!("Could not load categories: {e}")
                };
                self.toast = Some(Toast::error(message));
                None
            }
            Outcome::Created { dialog, result } => match result {
                Ok(saved) => {
                    tracing::debug!("created category {}", saved.data.id);
                    self.finish_mutation(dialog, saved.message, "Category created")
                }
                Err(e) => self.fail_mutation(dialog, "Create", e),
            },
            Outcome::Updated { id, dialog, result } => match result {
                Ok(saved) => {
                    tracing::debug!("updated category {id}");
                    self.finish_mutation(dialog, saved.message, "Category updated")
                }
                Err(e) => self.fail_mutation(dialog, "Update", e),
            },
            Outcome::Deleted { id, dialog, result } => match result {
                Ok(ack) => {
                    tracing::debug!("deleted category {id}");
                    self.finish_mutation(dialog, ack.message, "Category deleted")
                }
                Err(e) => self.fail_mutation(dialog, "Delete", e),
            },
        }
    }

    /// Apply a user action, returning any gateway call it needs
    pub fn dispatch(&mut self, action: ScreenAction) -> Option<Effect> {
        let count = self.visible().len();
        match action {
            ScreenAction::MoveUp => self.cursor.up(),
            ScreenAction::MoveDown => self.cursor.down(count),
            ScreenAction::GoToTop => self.cursor.top(),
            ScreenAction::GoToBottom => self.cursor.bottom(count),

            ScreenAction::FocusSearch => self.search.focused = true,
            ScreenAction::SearchInput(c) => {
                let mut query = std::mem::take(&mut self.search.query);
                query.push(c);
                self.set_search(query);
            }
            ScreenAction::SearchBackspace => {
                let mut query = std::mem::take(&mut self.search.query);
                query.pop();
                self.set_search(query);
            }
            ScreenAction::ExitSearch => self.search.focused = false,
            ScreenAction::ClearSearchAndExit => {
                self.set_search(String::new());
                self.search.focused = false;
            }

            ScreenAction::OpenAdd => self.open_add(),
            ScreenAction::OpenEdit => {
                let id = self.action_target()?;
                let _ = self.open_edit(id);
            }
            ScreenAction::OpenView => {
                let id = self.action_target()?;
                let _ = self.open_view(id);
            }
            ScreenAction::OpenDelete => {
                let id = self.action_target()?;
                let _ = self.open_delete(id);
            }
            ScreenAction::CloseDialog => self.close_dialog(),

            ScreenAction::FormInput(c) => {
                match self.form_field {
                    FormField::Code => self.draft.code.push(c),
                    FormField::Name => self.draft.name.push(c),
                    FormField::Kind => {}
                }
                self.form_error = None;
            }
            ScreenAction::FormBackspace => {
                match self.form_field {
                    FormField::Code => {
                        self.draft.code.pop();
                    }
                    FormField::Name => {
                        self.draft.name.pop();
                    }
                    FormField::Kind => {}
                }
                self.form_error = None;
            }
            ScreenAction::NextField => self.form_field = self.form_field.next(),
            ScreenAction::PrevField => self.form_field = self.form_field.prev(),
            ScreenAction::CycleKind => self.draft.kind = self.draft.kind.next(),
            ScreenAction::Submit => return self.submit().ok(),

            ScreenAction::ConfirmDelete => return self.confirm_delete().ok(),

            ScreenAction::Refresh => return Some(self.start_load()),
            ScreenAction::DismissToast => self.toast = None,
            ScreenAction::Quit => self.should_exit = true,
        }
        None
    }

    /// Record a row action applies to: the one on view, else the highlighted row
    fn action_target(&self) -> Option<u64> {
        match &self.dialog {
            Dialog::Viewing(record) => Some(record.id),
            _ => self.highlighted().map(|c| c.id),
        }
    }

    fn find(&self, id: u64) -> Result<Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CatmanError::CategoryNotFound(id))
    }

    /// Show any error as a toast and pass the result through
    fn surface<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.toast = Some(Toast::error(e.to_string()));
        }
        result
    }

    fn reset_form(&mut self) {
        self.draft = CategoryDraft::default();
        self.form_field = FormField::default();
        self.form_error = None;
    }

    fn show(&mut self, dialog: Dialog) {
        self.dialog_seq += 1;
        self.dialog = dialog;
    }

    /// Whether the dialog numbered `seq` is still the one on screen
    fn owns(&self, seq: u64) -> bool {
        self.dialog.is_open() && self.dialog_seq == seq
    }

    fn finish_mutation(&mut self, dialog: u64, message: String, fallback: &str) -> Option<Effect> {
        self.saving = false;
        if self.owns(dialog) {
            self.reset_form();
            self.dialog = Dialog::Idle;
        }
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        self.toast = Some(Toast::success(message));
        Some(self.start_load())
    }

    fn fail_mutation(&mut self, dialog: u64, verb: &str, error: CatmanError) -> Option<Effect> {
        tracing::warn!("{verb} failed: {error}");
        self.saving = false;
        if self.owns(dialog) && self.dialog.is_form() {
            self.form_error = Some(error.to_string());
        }
        self.toast = Some(Toast::error(format!("{verb} failed: {error}")));
        None
    }
}
