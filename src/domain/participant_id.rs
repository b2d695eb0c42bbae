/*
    결재자/참조자 식별자. 백엔드는 사용자 id(Long)를 쓰지만
    목록을 만드는 쪽에서 어떤 값을 넘길지는 알 수 없으므로 숫자와 문자열 모두 그대로 보낸다.
*/
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ParticipantId {
    Number(i64),
    Text(String)
}

impl From<i64> for ParticipantId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

//CLI 인자 파싱용. 숫자로 읽히면 숫자 id로 보낸다.
impl std::str::FromStr for ParticipantId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(id) => Self::Number(id),
            Err(_) => Self::Text(s.to_owned())
        })
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id)
        }
    }
}
