use fxbook_core::suggest::port::TradeContext;

/// # Summary
/// 将交易上下文渲染为发给文本生成模型的提示词。
///
/// # Logic
/// 1. 设定"交易心理导师"的角色。
/// 2. 逐行列出方向、货币对、策略、结果与点数、是否保本、复盘原因与情绪。
/// 3. 约束输出：1 到 3 句、具体、支持性的语气，关联情绪与结果，保本盈利时给予肯定。
pub fn render_prompt(context: &TradeContext) -> String {
    let risk_free = if context.risk_free { "Yes" } else { "No" };
    format!(
        r#"Act as an experienced trading psychologist and mentor. A trader has just logged the following trade:
- Direction: {direction}
- Currency Pair: {pair}
- Strategy: {strategy}
- Result: {result} ({pips} pips)
- Risk-Free Trade: {risk_free}
- Trader's Reason for Win/Loss: "{reason}"
- Trader's Emotional State: "{emotion}"

Based on this information, give one concise, actionable suggestion that helps the trader improve their mindset or execution on the next trade. Be supportive and constructive, and avoid generic advice. Focus on how their emotional state connects to the outcome. If the trade was risk-free and a win, acknowledge the good trade management. Answer in 1-3 sentences."#,
        direction = context.direction,
        pair = context.currency_pair,
        strategy = context.strategy,
        result = context.result,
        pips = context.pips_captured,
        risk_free = risk_free,
        reason = context.reason,
        emotion = context.emotional_state,
    )
}
