use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No reply token on message {0}")]
    NoReplyToken(String),

    #[error("Empty reply for message {0}")]
    EmptyReply(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
