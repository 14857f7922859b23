#[cfg(test)]
mod tests {
    use crate::evolution::{
        detail_condition_text, format_conditions, resolve, resolve_json, species_names,
    };
    use crate::tests::common::{chain, chain_node, level_up, trade, use_item};
    use pretty_assertions::assert_eq;
    use schema::{EvolutionChain, EvolutionDetail, Language, NamedResource};

    #[test]
    fn test_linear_chain_yields_one_entry_per_stage() {
        // Arrange: bulbasaur -> ivysaur (16) -> venusaur (32)
        let tree = chain(chain_node(
            "bulbasaur",
            1,
            vec![],
            vec![chain_node(
                "ivysaur",
                2,
                vec![level_up(16)],
                vec![chain_node("venusaur", 3, vec![level_up(32)], vec![])],
            )],
        ));

        // Act
        let stages = resolve(&tree);

        // Assert
        assert_eq!(stages.len(), 3);
        assert!(stages.iter().all(|stage| stage.len() == 1));

        let root = &stages[0][0];
        assert_eq!((root.name.as_str(), root.id), ("bulbasaur", 1));
        assert!(!root.has_conditions(), "the base form carries no conditions");

        assert_eq!(stages[1][0].min_level, Some(16));
        assert_eq!(stages[1][0].trigger.as_deref(), Some("level-up"));
        assert_eq!(stages[2][0].min_level, Some(32));
        assert_eq!(stages[2][0].id, 3);
    }

    #[test]
    fn test_non_evolving_species_has_single_stage() {
        let tree = chain(chain_node("tauros", 128, vec![], vec![]));
        let stages = resolve(&tree);

        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].len(), 1);
        assert_eq!(stages[0][0].name, "tauros");
    }

    #[test]
    fn test_branches_keep_source_order_within_a_depth() {
        // eevee -> vaporeon / jolteon / flareon
        let tree = chain(chain_node(
            "eevee",
            133,
            vec![],
            vec![
                chain_node("vaporeon", 134, vec![use_item("water-stone")], vec![]),
                chain_node("jolteon", 135, vec![use_item("thunder-stone")], vec![]),
                chain_node("flareon", 136, vec![use_item("fire-stone")], vec![]),
            ],
        ));

        let stages = resolve(&tree);

        assert_eq!(stages.len(), 2);
        let names: Vec<&str> = stages[1].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["vaporeon", "jolteon", "flareon"]);
        assert_eq!(stages[1][1].item.as_deref(), Some("thunder-stone"));
    }

    #[test]
    fn test_sibling_subtrees_interleave_by_depth() {
        // root -> a -> a2, root -> b -> b2: depth 2 holds both grandchildren.
        let tree = chain(chain_node(
            "root",
            1,
            vec![],
            vec![
                chain_node("a", 2, vec![level_up(10)], vec![chain_node("a2", 3, vec![level_up(20)], vec![])]),
                chain_node("b", 4, vec![level_up(10)], vec![chain_node("b2", 5, vec![level_up(30)], vec![])]),
            ],
        ));

        let names = species_names(&tree);
        assert_eq!(
            names,
            vec![
                vec!["root".to_string()],
                vec!["a".to_string(), "b".to_string()],
                vec!["a2".to_string(), "b2".to_string()],
            ]
        );
    }

    #[test]
    fn test_only_first_detail_is_read() {
        let tree = chain(chain_node(
            "magneton",
            82,
            vec![],
            vec![chain_node(
                "magnezone",
                462,
                vec![
                    EvolutionDetail {
                        trigger: Some(NamedResource::new("level-up", "")),
                        location: Some(NamedResource::new("mt-coronet", "")),
                        ..Default::default()
                    },
                    use_item("thunder-stone"),
                ],
                vec![],
            )],
        ));

        let entry = &resolve(&tree)[1][0];
        assert_eq!(entry.location.as_deref(), Some("mt-coronet"));
        assert_eq!(entry.item, None);
        assert_eq!(format_conditions(entry, Language::En), "Special Location");
    }

    #[test]
    fn test_friendship_time_and_trade_flags() {
        let friendship_at_night = EvolutionDetail {
            trigger: Some(NamedResource::new("level-up", "")),
            min_happiness: Some(160),
            time_of_day: Some("night".to_string()),
            ..Default::default()
        };
        let empty_time = EvolutionDetail {
            time_of_day: Some(String::new()),
            ..trade()
        };
        let tree = chain(chain_node(
            "eevee",
            133,
            vec![],
            vec![
                chain_node("umbreon", 197, vec![friendship_at_night], vec![]),
                chain_node("fake", 9999, vec![empty_time], vec![]),
            ],
        ));

        let stages = resolve(&tree);
        let umbreon = &stages[1][0];
        assert!(umbreon.friendship);
        assert!(!umbreon.trade);
        assert_eq!(umbreon.time_of_day.as_deref(), Some("night"));
        assert_eq!(format_conditions(umbreon, Language::En), "Night • Friendship");
        assert_eq!(format_conditions(umbreon, Language::Ko), "밤 시간 • 친밀도");

        let traded = &stages[1][1];
        assert!(traded.trade);
        assert_eq!(traded.time_of_day, None, "empty time of day is treated as absent");
    }

    #[test]
    fn test_detail_condition_text() {
        let held_item_trade = EvolutionDetail {
            held_item: Some(NamedResource::new("metal-coat", "")),
            ..trade()
        };
        assert_eq!(
            detail_condition_text(&[held_item_trade], Language::En),
            "Trade • + metal-coat"
        );

        let known_move = EvolutionDetail {
            trigger: Some(NamedResource::new("level-up", "")),
            known_move: Some(NamedResource::new("ancient-power", "")),
            ..Default::default()
        };
        assert_eq!(
            detail_condition_text(&[known_move], Language::En),
            "Learn Move: ancient-power"
        );

        let happiness = EvolutionDetail {
            min_happiness: Some(220),
            ..Default::default()
        };
        assert_eq!(detail_condition_text(&[happiness], Language::En), "Friendship 220+");

        assert_eq!(
            detail_condition_text(&[EvolutionDetail::default()], Language::En),
            "Special Condition"
        );
        assert_eq!(detail_condition_text(&[], Language::En), "");
    }

    #[test]
    fn test_missing_root_yields_no_stages() {
        let rootless = EvolutionChain { id: 9, chain: None };
        assert!(resolve(&rootless).is_empty());
    }

    #[test]
    fn test_raw_api_payload_resolves() {
        let raw = r#"{
            "id": 10,
            "chain": {
                "species": {"name": "pichu", "url": "https://pokeapi.co/api/v2/pokemon-species/172/"},
                "evolution_details": [],
                "evolves_to": [{
                    "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
                    "evolution_details": [{
                        "trigger": {"name": "level-up", "url": ""},
                        "min_level": null,
                        "min_happiness": 220,
                        "time_of_day": "",
                        "item": null,
                        "gender": null,
                        "needs_overworld_rain": false,
                        "turn_upside_down": false
                    }],
                    "evolves_to": [{
                        "species": {"name": "raichu", "url": "https://pokeapi.co/api/v2/pokemon-species/26/"},
                        "evolution_details": [{
                            "trigger": {"name": "use-item", "url": ""},
                            "item": {"name": "thunder-stone", "url": ""},
                            "time_of_day": ""
                        }],
                        "evolves_to": []
                    }]
                }]
            }
        }"#;

        let stages = resolve_json(raw);

        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0][0].id, 172);
        assert!(stages[1][0].friendship);
        assert_eq!(stages[1][0].time_of_day, None);
        assert_eq!(format_conditions(&stages[2][0], Language::En), "Thunder Stone");
    }
}
