//! AI 交易建议生成客户端 (Gemini `generateContent`)。

pub mod gemini;
pub mod prompt;
