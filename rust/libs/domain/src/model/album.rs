use serde::{Deserialize, Serialize};

/// フィードの1レコードから導出されるアルバム。構築後は不変。
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub artist: String,
    pub name: String,
    pub image: String,
}
