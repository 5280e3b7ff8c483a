//! 渠道最小配置：channel secret、access token、可选 API URL。
//! 与外部交互：从环境变量 ChannelSecret、ChannelAccessToken、LINE_API_URL 加载。

use anyhow::Result;
use std::env;

use crate::bot_adapter::DEFAULT_LINE_API_URL;

/// 遮蔽密钥以便安全记录日志：保留前 7 位 + "***" + 后 4 位；长度 ≤ 11 时只返回 "***"。
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = token.chars().take(7).collect();
    let tail: String = token.chars().skip(len - 4).collect();
    format!("{}***{}", head, tail)
}

/// LINE 渠道配置（仅签名校验与回复 API 所需）。
#[derive(Clone)]
pub struct LineConfig {
    pub channel_secret: String,
    pub channel_access_token: String,
    pub api_url: Option<String>,
}

impl LineConfig {
    /// 从环境变量加载：ChannelSecret、ChannelAccessToken 必填，LINE_API_URL 可选。
    pub fn from_env() -> Result<Self> {
        let channel_secret =
            env::var("ChannelSecret").map_err(|_| anyhow::anyhow!("ChannelSecret not set"))?;
        let channel_access_token = env::var("ChannelAccessToken")
            .map_err(|_| anyhow::anyhow!("ChannelAccessToken not set"))?;
        let api_url = env::var("LINE_API_URL").ok();
        Ok(Self {
            channel_secret,
            channel_access_token,
            api_url,
        })
    }

    /// 使用给定 secret 与 token 构造，API URL 为 None。
    pub fn new(channel_secret: String, channel_access_token: String) -> Self {
        Self {
            channel_secret,
            channel_access_token,
            api_url: None,
        }
    }

    /// 校验：密钥非空；若设置了 LINE_API_URL，必须是合法 URL。
    pub fn validate(&self) -> Result<()> {
        if self.channel_secret.is_empty() {
            anyhow::bail!("ChannelSecret is empty");
        }
        if self.channel_access_token.is_empty() {
            anyhow::bail!("ChannelAccessToken is empty");
        }
        if let Some(ref url) = self.api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("LINE_API_URL is set but not a valid URL: {}", url);
            }
        }
        Ok(())
    }

    /// 回复 API 的基础地址。
    pub fn api_base(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_LINE_API_URL)
    }
}

impl std::fmt::Debug for LineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineConfig")
            .field("channel_secret", &mask_token(&self.channel_secret))
            .field("channel_access_token", &mask_token(&self.channel_access_token))
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = LineConfig::new("secret".to_string(), "token".to_string());
        assert_eq!(config.channel_secret, "secret");
        assert_eq!(config.channel_access_token, "token");
        assert!(config.api_url.is_none());
        assert_eq!(config.api_base(), DEFAULT_LINE_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_secrets_and_bad_url() {
        assert!(LineConfig::new(String::new(), "token".into()).validate().is_err());
        assert!(LineConfig::new("secret".into(), String::new()).validate().is_err());

        let mut config = LineConfig::new("secret".into(), "token".into());
        config.api_url = Some("not a url".into());
        assert!(config.validate().is_err());

        config.api_url = Some("http://127.0.0.1:8080".into());
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token("12345678901"), "***");
        assert_eq!(mask_token("123456789012"), "1234567***9012");
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let config = LineConfig::new(
            "0123456789abcdef0123456789abcdef".into(),
            "access-token-value-long-enough".into(),
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("0123456789abcdef0123456789abcdef"));
        assert!(!debug.contains("access-token-value-long-enough"));
    }
}
