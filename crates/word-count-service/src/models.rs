//! 数据模型
//!
//! 消息的结构由外部统计作业的协议决定，本服务只做透传。

use serde::{Deserialize, Serialize};

/// 用户提交的待统计消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub payload: String,
}

impl Message {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// 有序集合中的一条记录
///
/// 分数可能缺失，缺失时按 0 计数。
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMember {
    pub member: String,
    pub score: Option<f64>,
}

impl ScoredMember {
    pub fn new(member: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            member: member.into(),
            score,
        }
    }
}

/// 报表用的词频记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountPair {
    pub key: String,
    pub count: i64,
}

impl WordCountPair {
    pub fn new(key: impl Into<String>, count: i64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

impl From<ScoredMember> for WordCountPair {
    fn from(entry: ScoredMember) -> Self {
        Self {
            count: recover_count(entry.score),
            key: entry.member,
        }
    }
}

/// 从存储分数恢复词频：round(|score|)，分数缺失时为 0
///
/// 统计作业以负数写入计数，使按分数升序的区间查询即为按词频降序。
pub fn recover_count(score: Option<f64>) -> i64 {
    score.map(|s| s.abs().round() as i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recover_count_negated_score() {
        assert_eq!(recover_count(Some(-87.0)), 87);
        assert_eq!(recover_count(Some(-53.0)), 53);
    }

    #[test]
    fn test_recover_count_missing_score() {
        assert_eq!(recover_count(None), 0);
    }

    #[test]
    fn test_recover_count_rounds() {
        assert_eq!(recover_count(Some(-2.4)), 2);
        assert_eq!(recover_count(Some(-2.5)), 3);
        assert_eq!(recover_count(Some(-0.0)), 0);
        // 正分数同样取绝对值
        assert_eq!(recover_count(Some(7.6)), 8);
    }

    #[test]
    fn test_pair_from_scored_member() {
        let pair = WordCountPair::from(ScoredMember::new("the", Some(-87.0)));
        assert_eq!(pair, WordCountPair::new("the", 87));

        let pair = WordCountPair::from(ScoredMember::new("orphan", None));
        assert_eq!(pair, WordCountPair::new("orphan", 0));
    }

    #[test]
    fn test_pair_serialization() {
        let json = serde_json::to_value(WordCountPair::new("cat", 3)).unwrap();
        assert_eq!(json, serde_json::json!({"key": "cat", "count": 3}));
    }

    #[test]
    fn test_message_deserialization() {
        let message: Message = serde_json::from_str(r#"{"payload":"cat"}"#).unwrap();
        assert_eq!(message, Message::new("cat"));
    }
}
