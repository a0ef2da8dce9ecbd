mod common;

use common::mock_bot::{FailingBot, MockBot, StalledBot};
use dbot_core::{Bot, Chat, Handler, HandlerResponse, Message, User};
use menu_bot::{build_handler_chain, ConsoleBot, ConsoleSession, MenuHandler};
use menu_core::{MenuNavigator, MenuTree, SessionStore, MSG_INVALID_CHOICE};
use std::sync::Arc;
use std::time::Duration;

const MENU: &str = r#"{
    "id": "root",
    "message": "Welcome",
    "options": [
        {"label": "Buy", "value": "buy", "next": "buy"},
        {"label": "Help", "value": "help", "next": "help"}
    ],
    "children": {
        "buy": {
            "id": "buy",
            "message": "What to buy?",
            "options": [{"label": "Apples", "value": "apples", "next": "apples"}],
            "children": {
                "apples": {"id": "apples", "type": "text", "message": "Apples are on the way."}
            }
        },
        "help": {"id": "help", "type": "text", "message": "Ask at the counter."}
    }
}"#;

fn navigator() -> MenuNavigator {
    let tree = MenuTree::from_json_str(MENU).unwrap();
    MenuNavigator::with_in_memory_sessions(Arc::new(tree))
}

fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: None,
        is_bot: false,
    }
}

fn message(user: User, text: &str) -> Message {
    let chat = Chat {
        id: user.id,
        chat_type: "private".to_string(),
    };
    Message::incoming("1", user, chat, text)
}

#[tokio::test]
async fn test_each_text_message_gets_one_reply() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = MenuHandler::new(navigator(), bot, Duration::from_secs(1));

    let response = handler.handle(&message(user(7), "hello")).await.unwrap();
    assert_eq!(
        response,
        HandlerResponse::Reply("Welcome\n1. Buy\n2. Help".to_string())
    );

    let sent = rx.recv().await.unwrap();
    assert_eq!(sent.chat_id, 7);
    assert_eq!(sent.text, "Welcome\n1. Buy\n2. Help");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_conversation_walks_the_tree() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = MenuHandler::new(navigator(), bot, Duration::from_secs(1));
    let alice = user(1);

    for input in ["hi", "1", "apples", "anything", "menu"] {
        handler.handle(&message(alice.clone(), input)).await.unwrap();
    }

    let mut replies = Vec::new();
    while let Ok(record) = rx.try_recv() {
        replies.push(record.text);
    }
    assert_eq!(
        replies,
        vec![
            "Welcome\n1. Buy\n2. Help",
            "What to buy?\n1. Apples",
            "Apples are on the way.",
            "Apples are on the way.",
            "Welcome\n1. Buy\n2. Help",
        ]
    );
    assert_eq!(handler.navigator().sessions().get("1"), "root");
}

#[tokio::test]
async fn test_invalid_choice_keeps_position() {
    let (bot, _rx) = MockBot::with_receiver();
    let handler = MenuHandler::new(navigator(), bot, Duration::from_secs(1));

    handler.handle(&message(user(3), "hi")).await.unwrap();
    handler.handle(&message(user(3), "2")).await.unwrap();
    assert_eq!(handler.navigator().sessions().get("3"), "help");

    handler.handle(&message(user(4), "hi")).await.unwrap();
    let response = handler.handle(&message(user(4), "9")).await.unwrap();
    assert_eq!(response, HandlerResponse::Reply(MSG_INVALID_CHOICE.to_string()));
    assert_eq!(handler.navigator().sessions().get("4"), "root");
}

#[tokio::test]
async fn test_bot_and_empty_messages_are_ignored() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = MenuHandler::new(navigator(), bot, Duration::from_secs(1));

    let mut from_bot = user(9);
    from_bot.is_bot = true;
    assert_eq!(
        handler.handle(&message(from_bot, "1")).await.unwrap(),
        HandlerResponse::Ignore
    );
    assert_eq!(
        handler.handle(&message(user(9), "")).await.unwrap(),
        HandlerResponse::Ignore
    );

    assert!(rx.try_recv().is_err());
    assert!(handler.navigator().sessions().get("9").is_empty());
}

#[tokio::test]
async fn test_failed_send_keeps_transition() {
    let handler = MenuHandler::new(navigator(), Arc::new(FailingBot), Duration::from_secs(1));

    handler.handle(&message(user(5), "hi")).await.unwrap();
    let response = handler.handle(&message(user(5), "buy")).await.unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply("What to buy?\n1. Apples".to_string())
    );
    assert_eq!(handler.navigator().sessions().get("5"), "buy");
}

#[tokio::test]
async fn test_timed_out_send_keeps_transition() {
    let handler = MenuHandler::new(navigator(), Arc::new(StalledBot), Duration::from_millis(20));

    handler.handle(&message(user(6), "hi")).await.unwrap();
    handler.handle(&message(user(6), "2")).await.unwrap();

    assert_eq!(handler.navigator().sessions().get("6"), "help");
}

#[tokio::test]
async fn test_full_chain_replies_through_menu_handler() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(navigator(), bot, Duration::from_secs(1));

    let response = chain.handle(&message(user(11), "start")).await.unwrap();
    assert!(matches!(response, HandlerResponse::Reply(ref text) if text.starts_with("Welcome")));

    let response = chain.handle(&message(user(11), "help")).await.unwrap();
    assert_eq!(response, HandlerResponse::Reply("Ask at the counter.".to_string()));

    assert_eq!(rx.recv().await.unwrap().text, "Welcome\n1. Buy\n2. Help");
    assert_eq!(rx.recv().await.unwrap().text, "Ask at the counter.");
}

#[tokio::test]
async fn test_concurrent_users_keep_separate_positions() {
    let (bot, _rx) = MockBot::with_receiver();
    let handler = Arc::new(MenuHandler::new(navigator(), bot, Duration::from_secs(1)));

    let mut tasks = Vec::new();
    for id in 0..32i64 {
        let handler = Arc::clone(&handler);
        tasks.push(tokio::spawn(async move {
            handler.handle(&message(user(id), "hi")).await.unwrap();
            let choice = if id % 2 == 0 { "1" } else { "2" };
            handler.handle(&message(user(id), choice)).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    for id in 0..32i64 {
        let expected = if id % 2 == 0 { "buy" } else { "help" };
        assert_eq!(handler.navigator().sessions().get(&id.to_string()), expected);
    }
}

#[tokio::test]
async fn test_console_session_drives_chain() {
    let bot: Arc<dyn Bot> = Arc::new(ConsoleBot::new(Vec::<u8>::new()));
    let session = ConsoleSession::new(
        build_handler_chain(navigator(), bot, Duration::from_secs(1)),
        42,
    );

    session.send("menu").await.unwrap();
    let response = session.send("Buy").await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(MSG_INVALID_CHOICE.to_string()));
}
