#[cfg(test)]
mod tests {
    use crate::formatter::{display_name, move_name, pokemon_display_name, Formatter, NameKind};
    use crate::tests::common::{
        fixture_client, names, species, type_info, url, FixtureTransport, TestPokemonBuilder,
    };
    use pretty_assertions::assert_eq;
    use schema::{Ability, Language, Move};
    use std::sync::Arc;

    fn formatter(transport: FixtureTransport) -> Formatter<FixtureTransport> {
        Formatter::new(Arc::new(fixture_client(transport)))
    }

    fn move_payload(name: &str, localized: &[(&str, &str)]) -> Move {
        Move {
            id: 33,
            name: name.to_string(),
            names: names(localized),
            power: Some(40),
            pp: Some(35),
            accuracy: Some(100),
            priority: 0,
            damage_class: None,
            type_: None,
            effect_entries: Vec::new(),
        }
    }

    #[test]
    fn test_sync_fallbacks_without_anything_cached() {
        let formatter = formatter(FixtureTransport::new());

        assert_eq!(formatter.type_name_sync("fire", Language::Ko), "Fire");
        assert_eq!(formatter.move_name_sync("water-gun", Language::Ja), "Water Gun");
        assert_eq!(formatter.ability_name_sync("keen-eye", Language::En), "Keen Eye");
        assert_eq!(formatter.client().transport().request_count(), 0);
    }

    #[test]
    fn test_bundled_names_fall_back_to_english_then_identifier() {
        let english_only = move_payload("tackle", &[("en", "Tackle")]);
        assert_eq!(move_name(&english_only, Language::Ko), "Tackle");

        let localized = move_payload("tackle", &[("en", "Tackle"), ("ko", "몸통박치기")]);
        assert_eq!(move_name(&localized, Language::Ko), "몸통박치기");

        let bare = move_payload("double-edge", &[]);
        assert_eq!(move_name(&bare, Language::Ja), "Double Edge");

        let pikachu = TestPokemonBuilder::new(25, "pikachu").build();
        assert_eq!(pokemon_display_name(&pikachu, None, Language::Ja), "Pikachu");
        let mut pikachu_species = species(25, "pikachu", None);
        pikachu_species.names = names(&[("en", "Pikachu"), ("ja", "ピカチュウ")]);
        assert_eq!(
            pokemon_display_name(&pikachu, Some(&pikachu_species), Language::Ja),
            "ピカチュウ"
        );
        assert_eq!(
            display_name(&pikachu_species, NameKind::Type, Language::Ko),
            "Pikachu"
        );
    }

    #[tokio::test]
    async fn test_async_name_is_memoized_per_language() {
        let transport = FixtureTransport::new();
        transport.serve_json(
            "/type/fire",
            &type_info(10, "fire", &[("en", "Fire"), ("ko", "불꽃"), ("ja", "ほのお")]),
        );
        let formatter = formatter(transport);

        assert_eq!(formatter.type_name("fire", Language::Ko).await, "불꽃");
        assert_eq!(formatter.type_name_sync("fire", Language::Ko), "불꽃");
        // Not resolved for Japanese yet.
        assert_eq!(formatter.type_name_sync("fire", Language::Ja), "Fire");

        assert_eq!(formatter.type_name("fire", Language::Ja).await, "ほのお");
        assert_eq!(formatter.client().transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_english_is_cached_when_target_is_missing() {
        let transport = FixtureTransport::new();
        transport.serve_json("/type/stellar", &type_info(19, "stellar", &[("en", "Stellar")]));
        let formatter = formatter(transport);

        assert_eq!(formatter.type_name("stellar", Language::Ko).await, "Stellar");
        assert_eq!(formatter.type_name_sync("stellar", Language::Ko), "Stellar");
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_without_caching() {
        let transport = FixtureTransport::new();
        let formatter = formatter(transport);

        assert_eq!(formatter.ability_name("solar-power", Language::Ko).await, "Solar Power");
        assert_eq!(formatter.ability_name("solar-power", Language::Ko).await, "Solar Power");

        let requests = formatter
            .client()
            .transport()
            .requests_for(&url("/ability/solar-power"));
        assert_eq!(requests, 2, "a failure is retried on the next call");
    }

    #[tokio::test]
    async fn test_preload_ignores_individual_failures() {
        let transport = FixtureTransport::new();
        transport.serve_json("/type/water", &type_info(11, "water", &[("en", "Water"), ("ko", "물")]));
        let formatter = formatter(transport);

        formatter.preload_types(Language::Ko).await;

        assert_eq!(formatter.type_name_sync("water", Language::Ko), "물");
        assert_eq!(formatter.type_name_sync("fire", Language::Ko), "Fire");
        assert_eq!(formatter.client().transport().request_count(), 18);
    }

    #[tokio::test]
    async fn test_ability_description() {
        let transport = FixtureTransport::new();
        let ability = Ability {
            id: 65,
            name: "overgrow".to_string(),
            names: names(&[("en", "Overgrow")]),
            is_main_series: true,
            generation: None,
            effect_entries: Vec::new(),
            flavor_text_entries: vec![schema::FlavorTextEntry {
                flavor_text: "Powers up Grass-type\nmoves in a pinch.".to_string(),
                language: schema::NamedResource::new("en", ""),
                version: None,
            }],
        };
        transport.serve_json("/ability/overgrow", &ability);
        let formatter = formatter(transport);

        assert_eq!(
            formatter.ability_description("overgrow", Language::Ko).await,
            "Powers up Grass-type moves in a pinch."
        );
        assert_eq!(
            formatter.ability_description("unknown", Language::En).await,
            "No description available."
        );
    }
}
