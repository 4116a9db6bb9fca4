use crate::ranker::{Ranked, Token};

/// Single-line JSON array of tokens, or of `{token, score}` objects.
pub fn render(ranked: &[Ranked], with_scores: bool) -> serde_json::Result<String> {
    if with_scores {
        serde_json::to_string(ranked)
    } else {
        let tokens: Vec<&Token> = ranked.iter().map(|r| &r.token).collect();
        serde_json::to_string(&tokens)
    }
}
