use comfy_table::{presets, Cell, ContentArrangement, Table};
use common::{Request, RequestStatus, StatusSummary};

use crate::board::RequestBoard;
use crate::client::RequestApi;

/// Label of the control offered for a request, if any.
pub fn action_label(status: RequestStatus) -> Option<&'static str> {
    match status.next()? {
        RequestStatus::Acknowledged => Some("ack"),
        RequestStatus::Completed => Some("complete"),
        RequestStatus::Pending => None,
    }
}

pub fn render_summary(summary: &StatusSummary) -> String {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(
        RequestStatus::ALL.iter().map(|s| Cell::new(s.label())).chain([Cell::new("Total")]),
    );
    table.add_row(
        RequestStatus::ALL.iter().map(|s| Cell::new(summary.get(*s))).chain([Cell::new(summary.total())]),
    );
    table.to_string()
}

pub fn render_requests(requests: &[Request]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Customer", "Details", "Status", "Action"]);

    for r in requests {
        table.add_row(vec![
            Cell::new(r.id),
            Cell::new(&r.customer_name),
            Cell::new(&r.request_details),
            Cell::new(r.status),
            Cell::new(action_label(r.status).unwrap_or("")),
        ]);
    }
    table.to_string()
}

pub fn render_board<A: RequestApi>(board: &RequestBoard<A>) -> String {
    let mut out = String::new();
    out.push_str("Customer Requests\n");
    out.push_str(&render_summary(&board.summary()));
    out.push_str("\n\nRequests\n");

    if board.is_loading() {
        out.push_str("Loading...");
    } else if board.requests().is_empty() {
        out.push_str("No requests yet.");
    } else {
        out.push_str(&render_requests(board.requests()));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::{request, FakeApi};

    #[test]
    fn test_action_labels() {
        assert_eq!(action_label(RequestStatus::Pending), Some("ack"));
        assert_eq!(action_label(RequestStatus::Acknowledged), Some("complete"));
        assert_eq!(action_label(RequestStatus::Completed), None);
    }

    #[tokio::test]
    async fn test_loading_then_empty() {
        let mut board = RequestBoard::new(FakeApi::default());
        assert!(render_board(&board).contains("Loading..."));

        board.load().await;
        let out = render_board(&board);
        assert!(out.contains("No requests yet."));
        assert!(!out.contains("Loading..."));
    }

    #[tokio::test]
    async fn test_rows_and_counts() {
        let api = FakeApi::default();
        *api.store.lock().unwrap() = vec![
            request(1, "Alice", RequestStatus::Pending),
            request(2, "Bob", RequestStatus::Acknowledged),
            request(3, "Carol", RequestStatus::Completed),
        ];
        let mut board = RequestBoard::new(api);
        board.load().await;

        let out = render_board(&board);
        assert!(out.contains("Alice"));
        assert!(out.contains("details for Bob"));
        assert!(out.contains("acknowledged"));
        assert!(out.contains("complete"));
        assert!(!out.contains("No requests yet."));
    }

    #[test]
    fn test_summary_cells() {
        let summary = StatusSummary { pending: 4, acknowledged: 0, completed: 12 };
        let out = render_summary(&summary);
        assert!(out.contains("Pending"));
        assert!(out.contains("Acknowledged"));
        assert!(out.contains("Total"));
        assert!(out.contains("12"));
        assert!(out.contains("16"));
    }
}
