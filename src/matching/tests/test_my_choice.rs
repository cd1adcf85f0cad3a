#[cfg(test)]
mod tests {
    use crate::creature::{IdOverrideMap, MatchTier};
    use crate::matching::tests::common::{field, pair_ids, TestCreatureBuilder};
    use crate::matching::{match_breeding_pairs, MatchMode, MatchPool, SpeciesChoice};
    use pretty_assertions::assert_eq;
    use schema::{EggGroup, Gender};

    fn my_choice(female: Option<&str>, male: Option<&str>) -> MatchMode {
        MatchMode::MyChoice {
            female: female.map(SpeciesChoice::from),
            male: male.map(SpeciesChoice::from),
        }
    }

    fn mixed_pool() -> MatchPool {
        MatchPool::from_records(vec![
            field(1, "Eevee", Gender::Female, 90.0),
            field(2, "Eevee", Gender::Female, 30.0),
            field(3, "Meowth", Gender::Male, 80.0),
            field(4, "Eevee", Gender::Male, 99.0),
            TestCreatureBuilder::new(5, "Pidgey", Gender::Male)
                .groups(&[EggGroup::Flying])
                .build(),
            TestCreatureBuilder::ditto(6).build(),
        ])
    }

    #[test]
    fn test_chosen_species_only() {
        let pool = mixed_pool();

        let pairs = match_breeding_pairs(
            &pool,
            &my_choice(Some("eevee"), Some("Meowth")),
            2,
            false,
            &IdOverrideMap::new(),
        );

        // Eevee male and Ditto are never considered.
        assert_eq!(pair_ids(&pairs), vec![(1, 3)]);
        assert_eq!(pairs[0].tier, MatchTier::EggGroup);
    }

    #[test]
    fn test_ditto_as_male_side() {
        let pool = mixed_pool();

        let pairs = match_breeding_pairs(
            &pool,
            &my_choice(Some("Eevee"), Some("Ditto")),
            2,
            false,
            &IdOverrideMap::new(),
        );

        assert_eq!(pair_ids(&pairs), vec![(1, 6)]);
        assert_eq!(pairs[0].tier, MatchTier::Ditto);
    }

    #[test]
    fn test_ditto_as_female_side() {
        let pool = mixed_pool();

        let pairs = match_breeding_pairs(
            &pool,
            &my_choice(Some("Ditto"), Some("Pidgey")),
            2,
            false,
            &IdOverrideMap::new(),
        );

        assert_eq!(pair_ids(&pairs), vec![(6, 5)]);
    }

    #[test]
    fn test_invalid_configurations_yield_nothing() {
        let pool = mixed_pool();
        let overrides = IdOverrideMap::new();
        let run = |mode: MatchMode| match_breeding_pairs(&pool, &mode, 2, false, &overrides).len();

        assert_eq!(run(my_choice(Some("Eevee"), None)), 0);
        assert_eq!(run(my_choice(None, Some("Meowth"))), 0);
        assert_eq!(run(my_choice(Some("Ditto"), Some("ditto"))), 0);
        // No shared egg group and no Ditto involved.
        assert_eq!(run(my_choice(Some("Eevee"), Some("Pidgey"))), 0);
    }

    #[test]
    fn test_missing_species_yields_nothing() {
        let pool = mixed_pool();

        let pairs = match_breeding_pairs(
            &pool,
            &my_choice(Some("Clefairy"), Some("Meowth")),
            2,
            false,
            &IdOverrideMap::new(),
        );

        assert!(pairs.is_empty());
    }
}
