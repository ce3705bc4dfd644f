// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 解析网页 URL
///
/// 只接受带主机名的 http(s) URL；缺少协议的值（如 `displayLink` 的 `www.example.com`）
/// 会补上 `https://` 再解析。
pub fn parse_web_url(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", raw)).ok()?,
        Err(_) => return None,
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    parsed.host_str().filter(|host| !host.is_empty())?;
    Some(parsed)
}

/// 构造 favicon 服务的图标地址
pub fn favicon_url(endpoint: &str, hostname: &str) -> String {
    format!(
        "{}?domain={}&sz=128",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(hostname)
    )
}
