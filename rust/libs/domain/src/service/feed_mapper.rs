use serde_json::Value;
use tracing::debug;

use crate::model::album::Album;

/// デコード済みフィードからアルバム列を取り出すマッパー。
/// 不正なレコードは黙ってスキップし、残りのレコードの処理は続行する。
pub struct FeedMapper;

impl FeedMapper {
    pub fn albums(json: &Value) -> Vec<Album> {
        let Some(entries) = json
            .get("feed")
            .and_then(|feed| feed.get("entry"))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        let mut albums = Vec::new();
        for entry in entries {
            match Self::album(entry) {
                Some(album) => albums.push(album),
                None => debug!("必須フィールドを欠くエントリをスキップ: {:?}", entry.get("id")),
            }
        }
        albums
    }

    fn album(entry: &Value) -> Option<Album> {
        let artist = entry.get("im:artist")?.get("label")?.as_str()?;
        let name = entry.get("im:name")?.get("label")?.as_str()?;
        // im:image はサイズ昇順の3要素である前提で、最大サイズの3番目を固定位置で選ぶ。
        // フィード側が並び順を変えた場合は誤った画像を選ぶことになる。
        let image = entry
            .get("im:image")?
            .as_array()?
            .get(2)?
            .get("label")?
            .as_str()?;
        let id = entry
            .get("id")?
            .get("attributes")?
            .get("im:id")?
            .as_str()?;

        Some(Album {
            id: id.to_string(),
            artist: artist.to_string(),
            name: name.to_string(),
            image: image.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(id: &str, artist: &str, name: &str, image: &str) -> Value {
        json!({
            "im:artist": {"label": artist},
            "im:name": {"label": name},
            "im:image": [
                {"label": format!("{}-small", image)},
                {"label": format!("{}-medium", image)},
                {"label": image},
            ],
            "id": {"attributes": {"im:id": id}},
        })
    }

    #[test]
    fn test_albums() {
        let json = json!({"feed": {"entry": [
            {
                "im:artist": {"label": "Beatles"},
                "im:name": {"label": "Rubber Soul"},
                "im:image": [
                    {"label": "s"},
                    {"label": "m"},
                    {"label": "http://x/rs.jpg"},
                ],
                "id": {"attributes": {"im:id": "1"}},
            },
        ]}});

        let albums = FeedMapper::albums(&json);

        assert_eq!(
            albums,
            vec![Album {
                id: "1".to_string(),
                artist: "Beatles".to_string(),
                name: "Rubber Soul".to_string(),
                image: "http://x/rs.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn test_albums_skips_malformed_entry_and_preserves_order() {
        let mut broken = entry("2", "Beach Boys", "Pet Sounds", "http://x/ps.jpg");
        broken.as_object_mut().unwrap().remove("im:name");

        let json = json!({"feed": {"entry": [
            entry("1", "Beatles", "Rubber Soul", "http://x/rs.jpg"),
            broken,
            entry("3", "Kinks", "Something Else", "http://x/se.jpg"),
        ]}});

        let albums = FeedMapper::albums(&json);

        assert_eq!(albums.len(), 2, "不正なエントリがスキップされていません");
        assert_eq!(albums[0].id, "1");
        assert_eq!(albums[1].id, "3");
    }

    #[test]
    fn test_albums_skips_entry_with_short_image_list() {
        let json = json!({"feed": {"entry": [
            {
                "im:artist": {"label": "Beatles"},
                "im:name": {"label": "Rubber Soul"},
                "im:image": [
                    {"label": "s"},
                    {"label": "m"},
                ],
                "id": {"attributes": {"im:id": "1"}},
            },
        ]}});

        let albums = FeedMapper::albums(&json);

        assert!(albums.is_empty());
    }

    #[test]
    fn test_albums_selects_third_image_variant() {
        let json = json!({"feed": {"entry": [
            entry("1", "Beatles", "Rubber Soul", "http://x/rs-large.jpg"),
        ]}});

        let albums = FeedMapper::albums(&json);

        assert_eq!(albums[0].image, "http://x/rs-large.jpg");
    }

    #[test]
    fn test_albums_missing_feed_path_is_empty() {
        assert!(FeedMapper::albums(&json!({})).is_empty());
        assert!(FeedMapper::albums(&json!({"feed": {}})).is_empty());
        assert!(FeedMapper::albums(&json!({"feed": {"entry": {}}})).is_empty());
    }
}
