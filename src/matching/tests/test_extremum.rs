#[cfg(test)]
mod tests {
    use crate::creature::IdOverrideMap;
    use crate::matching::tests::common::{assert_pairs_valid, field, pair_ids, TestCreatureBuilder};
    use crate::matching::{match_breeding_pairs, MatchMode, MatchPool};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{EggGroup, Gender};

    fn graded_pool() -> MatchPool {
        MatchPool::from_records(vec![
            field(1, "Eevee", Gender::Female, 12.0),
            field(2, "Eevee", Gender::Female, 97.0),
            field(3, "Eevee", Gender::Female, 55.0),
            field(4, "Meowth", Gender::Male, 8.0),
            field(5, "Meowth", Gender::Male, 91.0),
            field(6, "Meowth", Gender::Male, 60.0),
        ])
    }

    #[rstest]
    #[case(MatchMode::ExtremumHigh, vec![(2, 5), (3, 6)])]
    #[case(MatchMode::ExtremumLow, vec![(1, 4), (3, 6)])]
    fn test_extremes_pair_together(#[case] mode: MatchMode, #[case] expected: Vec<(u64, u64)>) {
        // Arrange
        let pool = graded_pool();

        // Act
        let pairs = match_breeding_pairs(&pool, &mode, 2, false, &IdOverrideMap::new());

        // Assert
        assert_pairs_valid(&pairs, 2);
        assert_eq!(pair_ids(&pairs), expected);
    }

    #[test]
    fn test_male_can_lead_in_extremum_mode() {
        let pool = MatchPool::from_records(vec![
            field(1, "Eevee", Gender::Female, 40.0),
            field(2, "Eevee", Gender::Female, 70.0),
            field(3, "Meowth", Gender::Male, 99.0),
        ]);

        let pairs = match_breeding_pairs(&pool, &MatchMode::ExtremumHigh, 1, false, &IdOverrideMap::new());

        // The male is the fittest creature, so he picks the fitter female.
        assert_eq!(pair_ids(&pairs), vec![(2, 3)]);
    }

    #[test]
    fn test_genderless_left_over_for_ditto() {
        let pool = MatchPool::from_records(vec![
            TestCreatureBuilder::new(1, "Magnemite", Gender::Unknown)
                .groups(&[EggGroup::Mineral])
                .fitness(20.0)
                .build(),
            TestCreatureBuilder::new(2, "Magnemite", Gender::Unknown)
                .groups(&[EggGroup::Mineral])
                .fitness(80.0)
                .build(),
            TestCreatureBuilder::ditto(3).build(),
        ]);

        let pairs = match_breeding_pairs(&pool, &MatchMode::ExtremumLow, 2, false, &IdOverrideMap::new());

        assert_eq!(pair_ids(&pairs), vec![(3, 1)]);
    }
}
