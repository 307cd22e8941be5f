#[cfg(test)]
mod tests {
    use userdir_cli::models::{Address, Company, Geo, User};
    use userdir_cli::query_view::{project, QueryEvent, QueryState, PAGE_SIZE};

    fn make_user(id: u64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: format!("user{}", id),
            email: email.to_string(),
            phone: "1-770-736-8031".to_string(),
            website: "example.org".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    fn make_directory(count: usize) -> Vec<User> {
        (1..=count as u64)
            .map(|i| make_user(i, &format!("User Number{}", i), &format!("user{}@example.com", i)))
            .collect()
    }

    fn ids(users: &[&User]) -> Vec<u64> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let records = make_directory(7);
        let page = project(&records, "", 1);

        assert_eq!(page.matching, records.len());
        assert_eq!(page.users.len(), 7);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let records = vec![
            make_user(1, "Leanne Graham", "Sincere@april.biz"),
            make_user(2, "Ervin Howell", "Shanna@melissa.tv"),
            make_user(3, "Clementine Bauch", "Nathan@yesenia.net"),
        ];

        let upper = project(&records, "ERVIN", 1);
        let lower = project(&records, "ervin", 1);
        let mixed = project(&records, "ErViN", 1);

        assert_eq!(ids(&upper.users), vec![2]);
        assert_eq!(ids(&upper.users), ids(&lower.users));
        assert_eq!(ids(&upper.users), ids(&mixed.users));
    }

    #[test]
    fn test_matches_email_as_well_as_name() {
        let records = vec![
            make_user(1, "Leanne Graham", "Sincere@april.biz"),
            make_user(2, "Ervin Howell", "Shanna@melissa.tv"),
        ];

        let page = project(&records, "melissa", 1);
        assert_eq!(ids(&page.users), vec![2]);

        let page = project(&records, "april", 1);
        assert_eq!(ids(&page.users), vec![1]);
    }

    #[test]
    fn test_project_is_idempotent() {
        let records = make_directory(25);

        let first = project(&records, "number1", 2);
        let second = project(&records, "number1", 2);

        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let records = vec![
            make_user(3, "Charlie Smith", "charlie@example.com"),
            make_user(1, "Alice Smith", "alice@example.com"),
            make_user(2, "Bob Smith", "bob@example.com"),
        ];

        let page = project(&records, "smith", 1);
        assert_eq!(ids(&page.users), vec![3, 1, 2]);
    }

    #[test]
    fn test_pages_reconstruct_matching_set() {
        let records = make_directory(37);
        let full = project(&records, "", 1);
        assert_eq!(full.matching, 37);
        assert_eq!(full.total_pages, 4);

        let mut seen = Vec::new();
        for page_number in 1..=full.total_pages {
            let page = project(&records, "", page_number);
            assert!(page.users.len() <= PAGE_SIZE);
            seen.extend(ids(&page.users));
        }

        let expected: Vec<u64> = (1..=37).collect();
        assert_eq!(seen, expected); // no duplicates, no omissions, in order
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_error() {
        let records = make_directory(12);

        let page = project(&records, "", 5);
        assert!(page.users.is_empty());
        assert_eq!(page.matching, 12);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_no_match_yields_empty_page() {
        let records = make_directory(10);

        let page = project(&records, "does-not-exist", 1);
        assert!(page.users.is_empty());
        assert_eq!(page.matching, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_scenario_ervin() {
        let records = vec![
            make_user(1, "Leanne Graham", "Sincere@april.biz"),
            make_user(2, "Ervin Howell", "Shanna@melissa.tv"),
        ];

        let page = project(&records, "ervin", 1);
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].name, "Ervin Howell");
        assert_eq!(page.matching, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_scenario_25_records_page_3() {
        let records = make_directory(25);

        let page = project(&records, "", 3);
        assert_eq!(page.users.len(), 5); // the remainder
        assert_eq!(page.matching, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_full_pages_hold_exactly_page_size() {
        let records = make_directory(25);

        let page1 = project(&records, "", 1);
        let page2 = project(&records, "", 2);
        assert_eq!(page1.users.len(), PAGE_SIZE);
        assert_eq!(page2.users.len(), PAGE_SIZE);
        assert_eq!(page1.users[0].id, 1);
        assert_eq!(page2.users[0].id, 11);
    }

    #[test]
    fn test_query_state_events() {
        let mut state = QueryState::default();
        assert_eq!(state.page, 1);
        assert!(state.term.is_empty());

        state.apply(QueryEvent::PageSelected(3));
        assert_eq!(state.page, 3);

        // A new search always lands back on page 1
        state.apply(QueryEvent::SearchSubmitted("howell".to_string()));
        assert_eq!(state.term, "howell");
        assert_eq!(state.page, 1);

        state.apply(QueryEvent::SearchSubmitted(String::new()));
        assert!(state.term.is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_projection_does_not_mutate_records() {
        let records = make_directory(5);
        let before = records.clone();

        let _ = project(&records, "number3", 1);
        let _ = project(&records, "", 9);

        assert_eq!(records, before);
    }
}
