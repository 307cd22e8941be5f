use criterion::{black_box, criterion_group, criterion_main, Criterion};
use userdir_cli::models::{Address, Company, Geo, User};
use userdir_cli::query_view::project;

fn create_directory(count: usize) -> Vec<User> {
    let surnames = [
        "Graham", "Howell", "Bauch", "Lebsack", "Dietrich", "Schulist", "Weissnat", "Runolfsdottir",
        "Reichert", "DuBuque",
    ];

    (0..count as u64)
        .map(|i| {
            let surname = surnames[i as usize % surnames.len()];
            User {
                id: i + 1,
                name: format!("Person {} {}", i, surname),
                username: format!("person{}", i),
                email: format!("person{}@{}.example.com", i, surname.to_lowercase()),
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
        })
        .collect()
}

fn benchmark_project(c: &mut Criterion) {
    let dir_1k = create_directory(1_000);
    let dir_10k = create_directory(10_000);

    let mut group = c.benchmark_group("project");

    group.bench_function("1k_empty_query", |b| {
        b.iter(|| {
            let page = project(&dir_1k, black_box(""), black_box(1));
            assert_eq!(page.matching, 1_000);
        });
    });

    group.bench_function("1k_substring", |b| {
        b.iter(|| {
            let page = project(&dir_1k, black_box("howell"), black_box(1));
            assert!(page.matching > 0);
        });
    });

    group.bench_function("10k_substring_last_page", |b| {
        b.iter(|| {
            let page = project(&dir_10k, black_box("graham"), black_box(100));
            assert!(page.total_pages > 0);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_project);
criterion_main!(benches);
