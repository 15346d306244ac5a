//! End-to-end widget flows driven the way the UI layer drives them:
//! one task per pending reply, sleeping on the injected clock before
//! delivery.

use std::time::Duration;

use rdchat_core::{
    ChatSession, QnaEntry, QnaList, RecordingSleeper, Sender, Sleeper, WidgetConfig,
};

fn demo_qna() -> QnaList {
    QnaList::new(vec![
        QnaEntry {
            question: "opening hours".to_string(),
            answer: "We are open 9am to 5pm, Monday to Friday.".to_string(),
        },
        QnaEntry {
            question: "shipping".to_string(),
            answer: "Orders ship within two business days.".to_string(),
        },
        QnaEntry {
            question: "returns".to_string(),
            answer: "You can return any item within 30 days.".to_string(),
        },
    ])
    .unwrap()
}

/// Sleep out a pending reply on the given clock, then deliver it.
async fn drive_reply(
    session: &mut ChatSession,
    sleeper: &RecordingSleeper,
    reply: rdchat_core::PendingReply,
) {
    sleeper.sleep(reply.delay).await;
    session.deliver(reply);
}

#[test]
fn test_free_text_round_trip() {
    tokio_test::block_on(async {
        let sleeper = RecordingSleeper::new();
        let mut session = ChatSession::new(WidgetConfig::default(), demo_qna());

        session.open();
        let reply = session.submit("when are your opening hours?").unwrap();
        drive_reply(&mut session, &sleeper, reply).await;

        // welcome + user question + bot answer
        let bubbles = session.bubbles();
        assert_eq!(bubbles.len(), 3);
        assert!(bubbles[0].welcome);
        assert_eq!(bubbles[1].sender, Sender::User);
        assert_eq!(bubbles[2].sender, Sender::Bot);
        assert_eq!(bubbles[2].text, "We are open 9am to 5pm, Monday to Friday.");

        // Reply waited out the configured typing delay.
        assert_eq!(sleeper.slept(), vec![Duration::from_millis(1200)]);
    });
}

#[test]
fn test_fallback_round_trip() {
    tokio_test::block_on(async {
        let sleeper = RecordingSleeper::new();
        let config = WidgetConfig::default().with_fallback_message("Sorry, I don't know that one.");
        let mut session = ChatSession::new(config, demo_qna());

        session.open();
        let reply = session.submit("what is the meaning of life?").unwrap();
        drive_reply(&mut session, &sleeper, reply).await;

        let last = session.bubbles().last().unwrap();
        assert_eq!(last.text, "Sorry, I don't know that one.");
        assert_eq!(last.sender, Sender::Bot);
    });
}

#[test]
fn test_suggestion_click_produces_question_then_answer() {
    tokio_test::block_on(async {
        let sleeper = RecordingSleeper::new();
        let mut session = ChatSession::new(WidgetConfig::default(), demo_qna());
        session.open();

        let suggestions: Vec<String> = session.suggestions().map(String::from).collect();
        assert_eq!(suggestions, vec!["opening hours", "shipping", "returns"]);

        let reply = session.pick_suggestion(2).unwrap();
        drive_reply(&mut session, &sleeper, reply).await;

        let bubbles = session.bubbles();
        // welcome, then exactly two new bubbles in order
        assert_eq!(bubbles.len(), 3);
        assert_eq!(bubbles[1].sender, Sender::User);
        assert_eq!(bubbles[1].text, "returns");
        assert_eq!(bubbles[2].sender, Sender::Bot);
        assert_eq!(bubbles[2].text, "You can return any item within 30 days.");

        // Suggestions use the shorter delay.
        assert_eq!(sleeper.slept(), vec![Duration::from_millis(1000)]);
    });
}

#[test]
fn test_empty_input_is_a_no_op() {
    let mut session = ChatSession::new(WidgetConfig::default(), demo_qna());
    session.open();
    let before = session.bubbles().len();

    assert!(session.submit("").is_none());
    assert!(session.submit("   ").is_none());
    assert_eq!(session.bubbles().len(), before);
}

#[test]
fn test_unread_badge_flow() {
    tokio_test::block_on(async {
        let sleeper = RecordingSleeper::new();
        let mut session = ChatSession::new(WidgetConfig::default(), demo_qna());

        // User sends, then closes the window before the reply lands.
        session.open();
        let reply = session.submit("shipping").unwrap();
        session.close();
        drive_reply(&mut session, &sleeper, reply).await;
        assert_eq!(session.unread(), 1);

        // Opening clears the badge and does not re-append the welcome.
        session.open();
        assert_eq!(session.unread(), 0);
        assert_eq!(
            session.bubbles().iter().filter(|b| b.welcome).count(),
            1
        );
    });
}

#[test]
fn test_overlapping_replies_keep_their_own_slots() {
    tokio_test::block_on(async {
        let sleeper = RecordingSleeper::new();
        let mut session = ChatSession::new(WidgetConfig::default(), demo_qna());
        session.open();

        let first = session.submit("shipping").unwrap();
        let second = session.submit("returns").unwrap();

        drive_reply(&mut session, &sleeper, first).await;
        drive_reply(&mut session, &sleeper, second).await;

        let texts: Vec<&str> = session
            .bubbles()
            .iter()
            .filter(|b| b.sender == Sender::Bot && !b.welcome)
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Orders ship within two business days.",
                "You can return any item within 30 days.",
            ]
        );
    });
}
