//! Character domain — descriptors for the `characters` resource.

pub mod wire;

pub use wire::{Character, CharacterDataWrapper, Image};

use crate::request::{ApiRequest, Method};

/// `GET characters` — list characters, optionally filtered.
///
/// Field order here is the order the filters land in the query string.
#[derive(Debug, Clone, Default)]
pub struct GetCharacters {
    /// Exact-match name filter.
    pub name: Option<String>,
    /// Prefix name filter (`nameStartsWith`).
    pub name_starts_with: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ApiRequest for GetCharacters {
    type Response = CharacterDataWrapper;

    fn resource_name(&self) -> String {
        "characters".to_string()
    }

    fn method(&self) -> Method {
        Method::Get
    }

    fn parameters(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name".to_string(), name.clone()));
        }
        if let Some(prefix) = &self.name_starts_with {
            params.push(("nameStartsWith".to_string(), prefix.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params
    }
}

/// `GET characters/{id}` — fetch a single character.
#[derive(Debug, Clone, Copy)]
pub struct GetCharacter {
    pub id: u64,
}

impl ApiRequest for GetCharacter {
    type Response = CharacterDataWrapper;

    fn resource_name(&self) -> String {
        format!("characters/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_descriptor_emits_only_set_filters_in_order() {
        let request = GetCharacters {
            name_starts_with: Some("Spider".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(
            request.parameters(),
            vec![
                ("nameStartsWith".to_string(), "Spider".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn default_list_descriptor_has_no_parameters() {
        assert!(GetCharacters::default().parameters().is_empty());
    }

    #[test]
    fn single_character_descriptor_embeds_the_id_in_the_path() {
        let request = GetCharacter { id: 1011334 };
        assert_eq!(request.resource_name(), "characters/1011334");
        assert_eq!(request.method(), Method::Get);
    }
}
