//! Integration tests for [`line_channel::LineBotAdapter`] against a mockito reply API.

use aqbot_core::{Bot, BotError, HandlerError, Message, MessageContent, OutboundMessage, Source};
use chrono::Utc;
use line_channel::LineBotAdapter;
use mockito::Matcher;

const ACCESS_TOKEN: &str = "test_channel_access_token";

fn message(reply_token: &str) -> Message {
    Message {
        id: "325708".to_string(),
        reply_token: reply_token.to_string(),
        source: Source {
            source_type: "user".to_string(),
            user_id: Some("U4af4980629".to_string()),
        },
        content: MessageContent::Text("台北".to_string()),
        created_at: Utc::now(),
    }
}

/// **Test: One POST carries the reply token, bearer token and all parts in order.**
#[tokio::test]
async fn test_reply_posts_all_parts_in_one_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/bot/message/reply")
        .match_header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
            "messages": [
                {"type": "text", "text": "325708: 台北的 AQI(空氣品質指標) 數值為 42"},
                {"type": "text", "text": "資料每小時更新"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let bot = LineBotAdapter::with_api_base(ACCESS_TOKEN.to_string(), server.url());
    bot.reply(
        &message("nHuyWiB7yP5Zw52FIkcQobQuGDXCTA"),
        &[
            OutboundMessage::text("325708: 台北的 AQI(空氣品質指標) 數值為 42"),
            OutboundMessage::text("資料每小時更新"),
        ],
    )
    .await
    .unwrap();

    mock.assert_async().await;
}

/// **Test: Sticker parts use packageId / stickerId.**
#[tokio::test]
async fn test_reply_with_sticker() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/bot/message/reply")
        .match_body(Matcher::Json(serde_json::json!({
            "replyToken": "token",
            "messages": [
                {"type": "text", "text": "測試測試"},
                {"type": "sticker", "packageId": "1", "stickerId": "1"}
            ]
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let bot = LineBotAdapter::with_api_base(ACCESS_TOKEN.to_string(), server.url());
    bot.reply(
        &message("token"),
        &[
            OutboundMessage::text("測試測試"),
            OutboundMessage::sticker("1", "1"),
        ],
    )
    .await
    .unwrap();

    mock.assert_async().await;
}

/// **Test: A non-success answer (e.g. expired reply token) is a Bot error carrying status and body.**
#[tokio::test]
async fn test_reply_api_error_is_bot_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v2/bot/message/reply")
        .with_status(400)
        .with_body(r#"{"message":"Invalid reply token"}"#)
        .create_async()
        .await;

    let bot = LineBotAdapter::with_api_base(ACCESS_TOKEN.to_string(), server.url());
    let err = bot
        .reply(&message("expired"), &[OutboundMessage::text("x")])
        .await
        .unwrap_err();

    match err {
        BotError::Bot(msg) => {
            assert!(msg.contains("400"), "{msg}");
            assert!(msg.contains("Invalid reply token"), "{msg}");
        }
        other => panic!("expected Bot error, got {other:?}"),
    }
}

/// **Test: Empty reply token or empty parts fail before any request is made.**
#[tokio::test]
async fn test_reply_precondition_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/bot/message/reply")
        .expect(0)
        .create_async()
        .await;
    let bot = LineBotAdapter::with_api_base(ACCESS_TOKEN.to_string(), server.url());

    let no_token = bot
        .reply(&message(""), &[OutboundMessage::text("x")])
        .await
        .unwrap_err();
    assert!(matches!(
        no_token,
        BotError::Handler(HandlerError::NoReplyToken(_))
    ));

    let no_parts = bot.reply(&message("token"), &[]).await.unwrap_err();
    assert!(matches!(no_parts, BotError::Handler(HandlerError::EmptyReply(_))));

    mock.assert_async().await;
}
