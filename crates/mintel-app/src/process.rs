//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages and hands every resulting action to the action dispatcher.

use mintel_client::AnalysisClient;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &AnalysisClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewState;
    use mintel_core::AnalysisType;

    #[tokio::test]
    async fn test_submit_round_trip_through_backend() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/analyze")
            .with_status(200)
            .with_body(
                r##"{"report": "# Acme Corp\n...", "sources": ["https://example.com/a"],
                    "company_name": "acme corp", "analysis_type": "due_diligence"}"##,
            )
            .create_async()
            .await;

        let client = AnalysisClient::new(&server.url(), None).unwrap();
        let (tx, mut rx) = mpsc::channel(32);
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::SelectAnalysis(AnalysisType::DueDiligence),
            &tx,
            &client,
        );
        process_message(
            &mut state,
            Message::SubjectInput {
                text: "Acme Corp".to_string(),
            },
            &tx,
            &client,
        );
        process_message(&mut state, Message::SubmitAnalysis, &tx, &client);
        assert_eq!(state.view_state(), ViewState::Loading);

        // Feed background messages back until the request resolves
        while state.view_state() == ViewState::Loading {
            let msg = rx.recv().await.unwrap();
            process_message(&mut state, msg, &tx, &client);
        }

        assert_eq!(state.view_state(), ViewState::Report);
        let report = state.report().unwrap();
        assert_eq!(report.company_name, "Acme Corp");
        assert_eq!(report.content, "# Acme Corp\n...");
        assert_eq!(report.sources.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_round_trip_failure_returns_to_input() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/analyze")
            .with_status(500)
            .create_async()
            .await;

        let client = AnalysisClient::new(&server.url(), None).unwrap();
        let (tx, mut rx) = mpsc::channel(32);
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::SelectAnalysis(AnalysisType::Competition),
            &tx,
            &client,
        );
        process_message(
            &mut state,
            Message::SubjectInput {
                text: "Beta Inc".to_string(),
            },
            &tx,
            &client,
        );
        process_message(&mut state, Message::SubmitAnalysis, &tx, &client);

        while state.view_state() == ViewState::Loading {
            let msg = rx.recv().await.unwrap();
            process_message(&mut state, msg, &tx, &client);
        }

        assert_eq!(state.view_state(), ViewState::Input);
        assert!(state.error().unwrap().starts_with("Analysis failed: "));
        assert!(state.report().is_none());
    }
}
