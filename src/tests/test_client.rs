#[cfg(test)]
mod tests {
    use crate::evolution;
    use crate::generation;
    use crate::tests::common::{
        chain, chain_node, fixture_client, level_up, species, type_info, url, FixtureTransport,
        TestPokemonBuilder,
    };
    use pretty_assertions::assert_eq;
    use schema::ListResponse;

    #[tokio::test]
    async fn test_second_lookup_is_served_from_cache() {
        let transport = FixtureTransport::new();
        transport.serve_json("/type/fire", &type_info(10, "fire", &[("en", "Fire")]));
        let client = fixture_client(transport);

        let first = client.get_type("fire").await.unwrap();
        let second = client.get_type("fire").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_by_name_also_caches_by_id() {
        let transport = FixtureTransport::new();
        transport.serve_json("/type/fire", &type_info(10, "fire", &[("en", "Fire")]));
        let client = fixture_client(transport);

        client.get_type("fire").await.unwrap();
        let by_id = client.get_type(10).await.unwrap();

        assert_eq!(by_id.name, "fire");
        assert_eq!(client.transport().request_count(), 1);
        assert_eq!(client.transport().requests_for(&url("/type/10")), 0);
    }

    #[tokio::test]
    async fn test_keys_are_normalized() {
        let transport = FixtureTransport::new();
        transport.serve_pokemon(&TestPokemonBuilder::new(25, "pikachu").build());
        let client = fixture_client(transport);

        let found = client.get_pokemon("  PikaChu ").await.unwrap();

        assert_eq!(found.id, 25);
        assert_eq!(client.transport().requests_for(&url("/pokemon/pikachu")), 1);
    }

    #[tokio::test]
    async fn test_failures_are_one_generic_error_and_not_cached() {
        let transport = FixtureTransport::new();
        transport.serve(url("/move/garbled"), "{ not json");
        let client = fixture_client(transport);

        let missing = client.get_move("missing").await.unwrap_err();
        let garbled = client.get_move("garbled").await.unwrap_err();

        assert_eq!(missing, garbled);
        assert_eq!(missing.to_string(), "Failed to fetch move data.");

        client.get_move("missing").await.unwrap_err();
        assert_eq!(client.transport().requests_for(&url("/move/missing")), 2);
    }

    #[tokio::test]
    async fn test_detail_degrades_when_chain_is_unavailable() {
        let transport = FixtureTransport::new();
        transport.serve_pokemon(&TestPokemonBuilder::new(1, "bulbasaur").build());
        transport.serve_json(
            "/pokemon-species/1",
            &species(1, "bulbasaur", Some("https://fixture.test/api/v2/evolution-chain/1/")),
        );
        let client = fixture_client(transport);

        let detail = client.get_pokemon_detail("bulbasaur").await.unwrap();

        assert_eq!(detail.species.name, "bulbasaur");
        assert_eq!(detail.evolution_chain, None);
        assert!(client.evolution_stages(&detail.species).await.is_empty());
    }

    #[tokio::test]
    async fn test_detail_fails_without_species() {
        let transport = FixtureTransport::new();
        transport.serve_pokemon(&TestPokemonBuilder::new(1, "bulbasaur").build());
        let client = fixture_client(transport);

        assert!(client.get_pokemon_detail(1).await.is_err());
    }

    #[tokio::test]
    async fn test_evolution_stages_through_the_client() {
        let chain_url = url("/evolution-chain/1/");
        let transport = FixtureTransport::new();
        transport.serve(
            chain_url.clone(),
            serde_json::to_string(&chain(chain_node(
                "charmander",
                4,
                vec![],
                vec![chain_node("charmeleon", 5, vec![level_up(16)], vec![])],
            )))
            .unwrap(),
        );
        let client = fixture_client(transport);

        let stages = client
            .evolution_stages(&species(4, "charmander", Some(chain_url.as_str())))
            .await;
        client
            .evolution_stages(&species(5, "charmeleon", Some(chain_url.as_str())))
            .await;

        assert_eq!(stages.len(), 2);
        assert_eq!(stages[1][0].min_level, Some(16));
        assert_eq!(client.transport().requests_for(&chain_url), 1);

        assert!(client
            .evolution_stages(&species(128, "tauros", None))
            .await
            .is_empty());
        let cached = client.get_evolution_chain(&chain_url).await.unwrap();
        assert_eq!(evolution::species_names(&cached)[1], vec!["charmeleon".to_string()]);
    }

    #[tokio::test]
    async fn test_search_normalizes_and_swallows_errors() {
        let transport = FixtureTransport::new();
        transport.serve_pokemon(&TestPokemonBuilder::new(6, "charizard").build());
        let client = fixture_client(transport);

        assert_eq!(client.search(" Charizard ").await.map(|p| p.id), Some(6));
        assert_eq!(client.search("agumon").await, None);
        assert_eq!(client.search("   ").await, None);
        assert_eq!(client.transport().request_count(), 2);
    }

    #[tokio::test]
    async fn test_generation_pages_are_synthesized() {
        let client = fixture_client(FixtureTransport::new());
        let johto = generation::by_id(2).unwrap();

        let first = client.list_by_generation(johto, 20, 0).await.unwrap();
        assert_eq!(first.count, 100);
        assert_eq!(first.results.len(), 20);
        assert_eq!(first.results[0].trailing_id(), Some(152));
        assert_eq!(first.results[0].name, "pokemon-152");
        assert!(first.next.is_some());
        assert_eq!(first.previous, None);

        let last = client.list_by_generation(johto, 20, 80).await.unwrap();
        assert_eq!(last.results.len(), 20);
        assert_eq!(last.results[19].trailing_id(), Some(251));
        assert_eq!(last.next, None);
        assert!(last.previous.is_some());

        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_generation_pages_clamp_huge_paging_values() {
        let client = fixture_client(FixtureTransport::new());
        let kanto = generation::by_id(1).unwrap();

        let everything = client.list_by_generation(kanto, u32::MAX, 0).await.unwrap();
        assert_eq!(everything.results.len(), 151);
        assert_eq!(everything.results[150].trailing_id(), Some(151));
        assert_eq!(everything.next, None);

        let past_end = client.list_by_generation(kanto, 20, u32::MAX).await.unwrap();
        assert!(past_end.results.is_empty());
        assert_eq!(past_end.next, None);
        assert!(past_end.previous.is_some());

        let both = client
            .list_by_generation(kanto, u32::MAX, u32::MAX)
            .await
            .unwrap();
        assert!(both.results.is_empty());
        assert_eq!(both.next, None);
        assert_eq!(both.count, 151);
    }

    #[tokio::test]
    async fn test_all_generations_use_the_listing_endpoint() {
        let transport = FixtureTransport::new();
        transport.serve_json(
            "/pokemon?limit=2&offset=0",
            &ListResponse {
                count: 1025,
                next: Some(url("/pokemon?limit=2&offset=2")),
                previous: None,
                results: vec![
                    schema::NamedResource::new("bulbasaur", url("/pokemon/1/")),
                    schema::NamedResource::new("ivysaur", url("/pokemon/2/")),
                ],
            },
        );
        let client = fixture_client(transport);

        let page = client
            .list_by_generation(generation::by_id(0).unwrap(), 2, 0)
            .await
            .unwrap();

        assert_eq!(page.count, 1025);
        assert_eq!(page.results[1].name, "ivysaur");
        assert_eq!(client.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_batch_fetch_keeps_order() {
        let transport = FixtureTransport::new();
        for (id, name) in [(1, "bulbasaur"), (4, "charmander"), (7, "squirtle")] {
            transport.serve_pokemon(&TestPokemonBuilder::new(id, name).build());
        }
        let client = fixture_client(transport);

        let batch = client.get_pokemon_batch(&[7, 1, 4]).await.unwrap();
        let names: Vec<&str> = batch.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["squirtle", "bulbasaur", "charmander"]);

        assert!(client.get_pokemon_batch(&[1, 999]).await.is_err());
    }
}
