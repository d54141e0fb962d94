use crate::provider::{DataProvider, Sort};
use crate::task::Task;

/// Which screen is showing: the task list, or one task's record.
#[derive(Debug)]
pub enum View {
    List,
    Detail(Task),
}

/// Dashboard state. Rows come from the backend; a failed fetch keeps the
/// previous rows and reports the error on the status line.
pub struct Dashboard {
    pub resource: String,
    pub tasks: Vec<Task>,
    pub total: usize,
    pub selected: usize,
    pub sort: Sort,
    pub view: View,
    pub status: Option<String>,
}

impl Dashboard {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            tasks: Vec::new(),
            total: 0,
            selected: 0,
            sort: Sort::default(),
            view: View::List,
            status: None,
        }
    }

    /// Reload the list from the backend with the current sort.
    pub fn refresh(&mut self, provider: &DataProvider) {
        match provider.get_list::<Task>(&self.resource, self.sort) {
            Ok(list) => {
                self.tasks = list.data;
                self.total = list.total;
                if self.selected >= self.tasks.len() {
                    self.selected = self.tasks.len().saturating_sub(1);
                }
                self.status = None;
            }
            Err(err) => {
                self.status = Some(format!("fetch failed: {}", err));
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    /// Fetch the selected row's full record and switch to the detail view.
    pub fn open_selected(&mut self, provider: &DataProvider) {
        let Some(id) = self.selected_task().map(|t| t.id.clone()) else {
            return;
        };
        match provider.get_one::<Task>(&self.resource, &id) {
            Ok(task) => {
                self.view = View::Detail(task);
                self.status = None;
            }
            Err(err) => {
                self.status = Some(format!("fetch failed: {}", err));
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.view = View::List;
    }

    pub fn cycle_sort_field(&mut self) {
        self.sort.field = self.sort.field.next();
    }

    pub fn flip_sort_order(&mut self) {
        self.sort.order = self.sort.order.flipped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{SortField, SortOrder};
    use crate::testutil::{serve_once, unreachable_url};

    fn task(id: &str) -> Task {
        Task {
            id: id.into(),
            state: "SUCCESS".into(),
            result: Some("ok".into()),
            date: Some("2024-11-30 10:00:00".into()),
        }
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut board = Dashboard::new("tasks");
        board.select_prev();
        board.select_next();
        assert_eq!(board.selected, 0);

        board.tasks = vec![task("1"), task("2")];
        board.select_next();
        board.select_next();
        assert_eq!(board.selected, 1);
        board.select_prev();
        assert_eq!(board.selected, 0);
    }

    #[test]
    fn refresh_replaces_rows() {
        let body = r#"[{"id":"1","state":"SUCCESS","result":"ok","date":null},
                       {"id":"2","state":"PENDING","result":null,"date":null}]"#;
        let (url, server) = serve_once("HTTP/1.1 200 OK", body);

        let provider = DataProvider::new(&url);
        let mut board = Dashboard::new("tasks");
        board.refresh(&provider);

        assert_eq!(board.tasks.len(), 2);
        assert_eq!(board.total, 2);
        assert!(board.status.is_none());
        server.join().unwrap();
    }

    #[test]
    fn failed_refresh_keeps_rows_and_sets_status() {
        let provider = DataProvider::new(&unreachable_url());
        let mut board = Dashboard::new("tasks");
        board.tasks = vec![task("1")];
        board.total = 1;

        board.refresh(&provider);

        assert_eq!(board.tasks.len(), 1);
        let status = board.status.expect("error should be reported");
        assert!(status.starts_with("fetch failed:"));
    }

    #[test]
    fn refresh_clamps_selection_to_new_row_count() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", r#"[{"id":"1","state":"PENDING"}]"#);

        let provider = DataProvider::new(&url);
        let mut board = Dashboard::new("tasks");
        board.tasks = vec![task("1"), task("2"), task("3")];
        board.selected = 2;

        board.refresh(&provider);
        assert_eq!(board.selected, 0);
        server.join().unwrap();
    }

    #[test]
    fn open_selected_switches_to_detail() {
        let body = r#"{"id":"1","state":"SUCCESS","result":"ok","date":"2024-11-30 10:00:00"}"#;
        let (url, server) = serve_once("HTTP/1.1 200 OK", body);

        let provider = DataProvider::new(&url);
        let mut board = Dashboard::new("tasks");
        board.tasks = vec![task("1")];

        board.open_selected(&provider);
        match &board.view {
            View::Detail(t) => assert_eq!(t.id, "1"),
            View::List => panic!("expected detail view"),
        }

        board.close_detail();
        assert!(matches!(board.view, View::List));

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /tasks/1 "));
    }

    #[test]
    fn open_selected_on_empty_list_is_a_no_op() {
        let provider = DataProvider::new(&unreachable_url());
        let mut board = Dashboard::new("tasks");
        board.open_selected(&provider);
        assert!(matches!(board.view, View::List));
        assert!(board.status.is_none());
    }

    #[test]
    fn sort_controls_update_sort() {
        let mut board = Dashboard::new("tasks");
        assert_eq!(board.sort.field, SortField::Date);
        assert_eq!(board.sort.order, SortOrder::Desc);

        board.cycle_sort_field();
        assert_eq!(board.sort.field, SortField::Id);

        board.flip_sort_order();
        assert_eq!(board.sort.order, SortOrder::Asc);
        board.flip_sort_order();
        assert_eq!(board.sort.order, SortOrder::Desc);
    }
}
