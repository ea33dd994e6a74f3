#![no_main]

use libfuzzer_sys::fuzz_target;
use lief_github::{decode_github_event, GithubBridgeEvent};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    for event_name in ["issue_comment", "pull_request", "pull_request_target", "push"] {
        match decode_github_event(event_name, &raw) {
            Ok(Some(GithubBridgeEvent::Comment(event))) => {
                assert_eq!(event_name, "issue_comment");
                assert!(event.comment_id.is_some());
            }
            Ok(Some(GithubBridgeEvent::PullRequest(_))) => {
                assert!(event_name.starts_with("pull_request"));
            }
            Ok(None) => {}
            Err(error) => assert!(error.to_string().contains(event_name)),
        }
    }
});
