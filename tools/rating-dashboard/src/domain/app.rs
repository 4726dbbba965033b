//! Application state management.

use crossterm::event::KeyCode;
use tracing::{error, info, warn};

use crate::api::{
    ApiError, CategoryFigures, Employee, EmployeeId, FetchEvent, RatingCategory, Resource,
};

use super::form::{EmployeeForm, FormMode};
use super::remote::Remote;
use super::roster::{EmployeeRoster, RosterError};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main dashboard view, keys navigate the employee table.
    #[default]
    Dashboard,
    /// Typing into the employee form.
    Form,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Work the event loop has to do on behalf of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Refetch all five resources.
    Refresh,
}

/// One-line feedback shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Base URL of the rating API (shown in the header).
    pub api_url: String,
    /// Local employee list.
    pub roster: EmployeeRoster,
    /// Fetch state of the employee list (number of records the server sent).
    pub roster_status: Remote<usize>,
    pub categories: Remote<Vec<RatingCategory>>,
    pub actual: Remote<CategoryFigures>,
    pub deviations: Remote<CategoryFigures>,
    pub suggestions: Remote<Vec<Employee>>,
    /// Add/update form.
    pub form: EmployeeForm,
    /// Selected row in the employee table.
    pub selected: usize,
    /// When the last full load finished.
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,
    /// Result of the last roster action.
    pub status: Option<StatusMessage>,
    in_flight: usize,
}

impl App {
    /// Create a new application instance. All slices start pending.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            state: AppState::Dashboard,
            api_url: api_url.into(),
            roster: EmployeeRoster::new(),
            roster_status: Remote::default(),
            categories: Remote::default(),
            actual: Remote::default(),
            deviations: Remote::default(),
            suggestions: Remote::default(),
            form: EmployeeForm::new(),
            selected: 0,
            last_refresh: None,
            status: None,
            in_flight: 0,
        }
    }

    /// Mark every slice as pending before a (re)load is issued.
    pub fn begin_refresh(&mut self) {
        self.roster_status.mark_pending();
        self.categories.mark_pending();
        self.actual.mark_pending();
        self.deviations.mark_pending();
        self.suggestions.mark_pending();
        self.in_flight = Resource::ALL.len();
    }

    /// Whether any fetch of the current load is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Apply one fetch completion to its slice.
    pub fn apply(&mut self, event: FetchEvent) {
        let resource = event.resource();
        match event {
            FetchEvent::Employees(result) => {
                let result = result.map(|employees| {
                    let count = employees.len();
                    self.roster.replace_all(employees);
                    count
                });
                settle(&mut self.roster_status, resource, result, |n| *n);
                self.clamp_selection();
            }
            FetchEvent::RatingCategories(result) => {
                settle(&mut self.categories, resource, result, Vec::len);
            }
            FetchEvent::ActualPercentages(result) => {
                settle(&mut self.actual, resource, result, CategoryFigures::len);
            }
            FetchEvent::Deviations(result) => {
                settle(&mut self.deviations, resource, result, CategoryFigures::len);
            }
            FetchEvent::Suggestions(result) => {
                settle(&mut self.suggestions, resource, result, Vec::len);
            }
        }

        if self.in_flight > 0 {
            self.in_flight -= 1;
            if self.in_flight == 0 {
                self.last_refresh = Some(chrono::Utc::now());
            }
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        match self.state {
            AppState::Dashboard => return self.handle_dashboard_key(key),
            AppState::Form => self.handle_form_key(key),
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Dashboard;
            }
            AppState::Quit => {}
        }
        None
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.state = AppState::Quit,
            KeyCode::Char('?') => self.state = AppState::Help,
            KeyCode::Char('r') | KeyCode::Char('R') => return Some(Command::Refresh),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('a') | KeyCode::Char('A') => self.open_form(),
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.cancel_form(),
            KeyCode::Tab | KeyCode::BackTab => self.form.next_field(),
            // Success and failure both land in `status`
            KeyCode::Enter => {
                self.submit_form().ok();
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        let len = self.roster.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.roster.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// The employee under the cursor.
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.roster.get(self.selected)
    }

    /// Focus the form for a new employee.
    pub fn open_form(&mut self) {
        if self.form.editing().is_some() {
            self.form.reset();
        }
        self.state = AppState::Form;
    }

    /// Copy the selected employee into the form for editing.
    pub fn edit_selected(&mut self) {
        if let Some(employee) = self.roster.get(self.selected).cloned() {
            self.begin_edit(&employee);
        }
    }

    /// Start editing a specific employee.
    pub fn begin_edit(&mut self, employee: &Employee) {
        self.form.begin_edit(employee);
        self.state = AppState::Form;
    }

    /// Drop form input and any edit marker.
    pub fn cancel_form(&mut self) {
        self.form.reset();
        self.state = AppState::Dashboard;
    }

    /// Add or update depending on the form mode.
    ///
    /// On success the form is cleared and focus returns to the table. A
    /// validation error leaves the form as typed so it can be fixed.
    pub fn submit_form(&mut self) -> Result<EmployeeId, RosterError> {
        let result = self.form.draft().and_then(|draft| match self.form.mode() {
            FormMode::Create => {
                let id = self.roster.add(draft)?.id;
                self.selected = self.roster.len() - 1;
                Ok(id)
            }
            FormMode::Update(id) => self.roster.update(id, draft).map(|_| id),
        });

        match &result {
            Ok(id) => {
                let verb = match self.form.mode() {
                    FormMode::Create => "Added",
                    FormMode::Update(_) => "Updated",
                };
                self.status = Some(StatusMessage::info(format!("{} employee {}", verb, id)));
                self.form.reset();
                self.state = AppState::Dashboard;
            }
            Err(e @ RosterError::NotFound(_)) => {
                // Edited employee vanished (deleted or reloaded away)
                warn!(error = %e, "update target missing");
                self.status = Some(StatusMessage::error(e.to_string()));
                self.form.reset();
                self.state = AppState::Dashboard;
            }
            Err(e) => {
                warn!(error = %e, "form rejected");
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }

        result
    }

    /// Delete the employee under the cursor.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_employee().map(|e| e.id) {
            self.delete_employee(id);
        }
    }

    /// Delete every employee with `id`.
    pub fn delete_employee(&mut self, id: EmployeeId) -> usize {
        let removed = self.roster.delete(id);
        if removed > 0 {
            self.status = Some(StatusMessage::info(format!("Deleted employee {}", id)));
        }
        self.clamp_selection();
        removed
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.roster.len().saturating_sub(1));
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

/// Record a fetch result on its slice and log the outcome.
fn settle<T>(
    slot: &mut Remote<T>,
    resource: Resource,
    result: Result<T, ApiError>,
    count: impl Fn(&T) -> usize,
) {
    match &result {
        Ok(data) => info!(resource = resource.label(), count = count(data), "loaded"),
        Err(e) => error!(resource = resource.label(), error = %e, "Error fetching {}", resource.label()),
    }
    slot.resolve(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: EmployeeId, name: &str, rating: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            rating: rating.to_string(),
        }
    }

    fn loaded_app(employees: Vec<Employee>) -> App {
        let mut app = App::new("http://localhost:7060");
        app.begin_refresh();
        app.apply(FetchEvent::Employees(Ok(employees)));
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_via_keys_appends_and_resets_form() {
        let mut app = loaded_app(vec![emp(1, "Ann", "A")]);

        app.handle_key(KeyCode::Char('a'));
        assert_eq!(app.state, AppState::Form);
        type_text(&mut app, "Bob");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "B");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.roster.employees(), &[emp(1, "Ann", "A"), emp(2, "Bob", "B")]);
        assert!(app.form.is_blank());
        assert_eq!(app.state, AppState::Dashboard);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_invalid_form_keeps_input() {
        let mut app = loaded_app(vec![]);
        app.open_form();
        type_text(&mut app, "Bob");

        assert_eq!(app.submit_form(), Err(RosterError::MissingRating));
        assert_eq!(app.form.name, "Bob");
        assert_eq!(app.state, AppState::Form);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
        assert!(app.roster.is_empty());
    }

    #[test]
    fn test_enter_with_blank_rating_reports_error() {
        let mut app = loaded_app(vec![]);
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "Bob");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.state, AppState::Form);
        assert_eq!(app.form.name, "Bob");
        let status = app.status.as_ref().expect("status set");
        assert!(status.is_error);
        assert_eq!(status.text, "Rating is required");
    }

    #[test]
    fn test_add_with_exhausted_ids_keeps_form() {
        let mut app = loaded_app(vec![emp(EmployeeId::MAX, "Ann", "A")]);
        app.open_form();
        app.form.name = "Bob".to_string();
        app.form.rating = "B".to_string();

        assert_eq!(app.submit_form(), Err(RosterError::IdsExhausted));
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.state, AppState::Form);
        assert_eq!(app.form.name, "Bob");
    }

    #[test]
    fn test_edit_then_update_preserves_length_and_id() {
        let mut app = loaded_app(vec![emp(1, "Ann", "A"), emp(2, "Bob", "B")]);

        app.select_next();
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.form.editing(), Some(2));
        assert_eq!(app.form.name, "Bob");

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Backspace);
        type_text(&mut app, "A");
        assert_eq!(app.submit_form(), Ok(2));

        assert_eq!(app.roster.employees(), &[emp(1, "Ann", "A"), emp(2, "Bob", "A")]);
        assert_eq!(app.form.editing(), None);
    }

    #[test]
    fn test_update_after_target_deleted() {
        let mut app = loaded_app(vec![emp(1, "Ann", "A"), emp(2, "Bob", "B")]);
        app.edit_selected();
        app.delete_employee(1);

        assert_eq!(app.submit_form(), Err(RosterError::NotFound(1)));
        assert_eq!(app.roster.len(), 1);
        assert!(app.form.is_blank());
        assert_eq!(app.state, AppState::Dashboard);
    }

    #[test]
    fn test_delete_selected_clamps_cursor() {
        let mut app = loaded_app(vec![emp(1, "Ann", "A"), emp(2, "Bob", "B")]);
        app.select_next();
        app.handle_key(KeyCode::Char('d'));

        assert_eq!(app.roster.employees(), &[emp(1, "Ann", "A")]);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = loaded_app(vec![emp(1, "Ann", "A"), emp(2, "Bob", "B")]);
        app.select_prev();
        assert_eq!(app.selected, 1);
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_failed_fetch_leaves_slice_untouched() {
        let mut app = App::new("http://localhost:7060");
        app.begin_refresh();
        app.apply(FetchEvent::Deviations(Err(ApiError::Connection(
            "Cannot connect to http://localhost:7060".to_string(),
        ))));

        assert!(app.deviations.data().is_none());
        assert!(app.deviations.error().is_some());
        assert!(app.categories.is_pending());
    }

    #[test]
    fn test_last_refresh_set_after_all_five() {
        let mut app = App::new("http://localhost:7060");
        app.begin_refresh();
        app.apply(FetchEvent::Employees(Ok(vec![])));
        app.apply(FetchEvent::RatingCategories(Ok(vec![])));
        app.apply(FetchEvent::ActualPercentages(Ok(CategoryFigures::default())));
        app.apply(FetchEvent::Deviations(Ok(CategoryFigures::default())));
        assert!(app.is_loading());
        assert!(app.last_refresh.is_none());

        app.apply(FetchEvent::Suggestions(Err(ApiError::Parse("bad".to_string()))));
        assert!(!app.is_loading());
        assert!(app.last_refresh.is_some());
    }

    #[test]
    fn test_refresh_and_quit_keys() {
        let mut app = App::new("http://localhost:7060");
        assert_eq!(app.handle_key(KeyCode::Char('r')), Some(Command::Refresh));
        app.handle_key(KeyCode::Char('?'));
        assert_eq!(app.state, AppState::Help);
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.state, AppState::Dashboard);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let mut app = App::new("http://localhost:7060");
        app.open_form();
        type_text(&mut app, "Quinn");
        assert!(!app.should_quit());
        assert_eq!(app.form.name, "Quinn");
    }
}
