//! Database-backed catalog tests
//!
//! Each test gets a fresh database with migrations applied.
//! Run with: DATABASE_URL=postgres://... cargo test --test repository_tests -- --ignored

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;

use locallibrary::{
    error::AppError,
    models::{
        author::NewAuthor,
        book::NewBook,
        book_instance::{LoanStatus, NewBookInstance},
        genre::NewGenre,
        language::NewLanguage,
    },
    repository::Repository,
    services::catalog::CatalogService,
};

fn new_book(title: &str, author_id: Option<i64>) -> NewBook {
    NewBook {
        title: title.to_string(),
        summary: format!("Summary of {}", title),
        isbn: "9788420471839".to_string(),
        author_id,
        language_id: None,
        genre_ids: vec![],
    }
}

fn new_copy(book_id: i64, status: LoanStatus, due_back: Option<NaiveDate>) -> NewBookInstance {
    NewBookInstance {
        book_id: Some(book_id),
        imprint: "Alfaguara, 2004".to_string(),
        due_back,
        status,
    }
}

fn service(repository: &Repository) -> CatalogService {
    CatalogService::new(Arc::new(repository.clone()))
}

#[sqlx::test]
#[ignore]
async fn dashboard_counts_copies_by_status(pool: PgPool) {
    let repo = Repository::new(pool);
    let book = repo.books_create(&new_book("Dune", None)).await.unwrap();
    repo.book_instances_create(&new_copy(book.id, LoanStatus::Maintenance, None))
        .await
        .unwrap();
    repo.book_instances_create(&new_copy(book.id, LoanStatus::Maintenance, None))
        .await
        .unwrap();
    repo.book_instances_create(&new_copy(book.id, LoanStatus::OnLoan, None))
        .await
        .unwrap();

    let counts = service(&repo).dashboard().await.unwrap();
    assert_eq!(counts.num_books, 1);
    assert_eq!(counts.num_instances, 3);
    assert_eq!(counts.num_instances_available, 0);
}

#[sqlx::test]
#[ignore]
async fn dashboard_counts_titles_with_word(pool: PgPool) {
    let repo = Repository::new(pool);
    repo.books_create(&new_book("El mundo es así", None)).await.unwrap();
    repo.books_create(&new_book("Dune", None)).await.unwrap();
    repo.genres_create(&NewGenre { name: "Novela".into() }).await.unwrap();

    let counts = service(&repo).dashboard().await.unwrap();
    assert_eq!(counts.num_books, 2);
    assert_eq!(counts.num_books_word, 1);
    assert_eq!(counts.num_genres, 1);
    assert_eq!(counts.num_authors, 0);
}

#[sqlx::test]
#[ignore]
async fn deleting_author_keeps_their_books(pool: PgPool) {
    let repo = Repository::new(pool);
    let author = repo
        .authors_create(&NewAuthor {
            first_name: "Pío".into(),
            last_name: "Baroja".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1872, 12, 28),
            date_of_death: None,
        })
        .await
        .unwrap();
    let book = repo
        .books_create(&new_book("El árbol de la ciencia", Some(author.id)))
        .await
        .unwrap();

    repo.authors_delete(author.id).await.unwrap();

    let book = repo.books_get_by_id(book.id).await.unwrap();
    assert_eq!(book.author_id, None);
    let detail = repo.books_get_detail(book.id).await.unwrap();
    assert!(detail.author.is_none());
}

#[sqlx::test]
#[ignore]
async fn deleting_language_or_book_clears_references(pool: PgPool) {
    let repo = Repository::new(pool);
    let spanish = repo
        .languages_create(&NewLanguage { name: "Español".into() })
        .await
        .unwrap();
    let mut data = new_book("Niebla", None);
    data.language_id = Some(spanish.id);
    let book = repo.books_create(&data).await.unwrap();
    let copy = repo
        .book_instances_create(&new_copy(book.id, LoanStatus::Available, None))
        .await
        .unwrap();

    repo.languages_delete(spanish.id).await.unwrap();
    assert_eq!(repo.books_get_by_id(book.id).await.unwrap().language_id, None);

    repo.books_delete(book.id).await.unwrap();
    let copy = repo.book_instances_get_by_id(copy.id).await.unwrap();
    assert_eq!(copy.book_id, None);
    assert_eq!(copy.status, LoanStatus::Available);
}

#[sqlx::test]
#[ignore]
async fn missing_records_are_not_found(pool: PgPool) {
    let repo = Repository::new(pool);
    let service = service(&repo);
    assert!(matches!(service.get_book(4242).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.get_author(4242).await, Err(AppError::NotFound(_))));
    assert!(matches!(repo.authors_delete(4242).await, Err(AppError::NotFound(_))));
}

#[sqlx::test]
#[ignore]
async fn twenty_five_books_make_three_pages(pool: PgPool) {
    let repo = Repository::new(pool);
    for n in 1..=25 {
        repo.books_create(&new_book(&format!("Tomo {:02}", n), None))
            .await
            .unwrap();
    }
    let service = service(&repo);

    let mut titles = Vec::new();
    let mut sizes = Vec::new();
    for page in 1..=3 {
        let response = service.list_books(Some(page)).await.unwrap();
        sizes.push(response.items.len());
        titles.extend(response.items.into_iter().map(|b| b.title));
    }
    assert_eq!(sizes, vec![10, 10, 5]);
    let expected: Vec<String> = (1..=25).map(|n| format!("Tomo {:02}", n)).collect();
    assert_eq!(titles, expected);
    assert!(matches!(service.list_books(Some(4)).await, Err(AppError::NotFound(_))));
}

#[sqlx::test]
#[ignore]
async fn book_detail_includes_relations(pool: PgPool) {
    let repo = Repository::new(pool);
    let fiction = repo.genres_create(&NewGenre { name: "Ficción".into() }).await.unwrap();
    let classic = repo.genres_create(&NewGenre { name: "Clásico".into() }).await.unwrap();
    let author = repo
        .authors_create(&NewAuthor {
            first_name: "Miguel".into(),
            last_name: "de Cervantes".into(),
            date_of_birth: None,
            date_of_death: None,
        })
        .await
        .unwrap();
    let mut data = new_book("Don Quijote", Some(author.id));
    data.genre_ids = vec![fiction.id, classic.id];
    let book = repo.books_create(&data).await.unwrap();

    let later = NaiveDate::from_ymd_opt(2030, 1, 1);
    let sooner = NaiveDate::from_ymd_opt(2029, 1, 1);
    repo.book_instances_create(&new_copy(book.id, LoanStatus::OnLoan, later))
        .await
        .unwrap();
    repo.book_instances_create(&new_copy(book.id, LoanStatus::Available, None))
        .await
        .unwrap();
    repo.book_instances_create(&new_copy(book.id, LoanStatus::Reserved, sooner))
        .await
        .unwrap();

    let detail = service(&repo).get_book(book.id).await.unwrap();
    assert_eq!(detail.url, format!("/books/{}", book.id));
    assert_eq!(
        detail.author.map(|a| a.name),
        Some("de Cervantes, Miguel".to_string())
    );
    let genres: Vec<String> = detail.genres.into_iter().map(|g| g.name).collect();
    assert_eq!(genres, vec!["Clásico", "Ficción"]);
    let due: Vec<_> = detail.copies.iter().map(|c| c.due_back).collect();
    assert_eq!(due, vec![None, sooner, later]);

    let author_detail = service(&repo).get_author(author.id).await.unwrap();
    assert_eq!(author_detail.books.len(), 1);
    assert_eq!(author_detail.books[0].title, "Don Quijote");
}

#[sqlx::test]
#[ignore]
async fn copy_identifiers_are_unique(pool: PgPool) {
    let repo = Repository::new(pool);
    let book = repo.books_create(&new_book("Dune", None)).await.unwrap();
    let a = repo
        .book_instances_create(&new_copy(book.id, LoanStatus::default(), None))
        .await
        .unwrap();
    let b = repo
        .book_instances_create(&new_copy(book.id, LoanStatus::default(), None))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.status, LoanStatus::Maintenance);
    assert_eq!(a.to_string(), format!("{} (Dune)", a.id));
}

#[sqlx::test]
#[ignore]
async fn overlong_isbn_is_rejected(pool: PgPool) {
    let repo = Repository::new(pool);
    let mut data = new_book("Dune", None);
    data.isbn = "97804410135930".into();
    assert!(matches!(repo.books_create(&data).await, Err(AppError::Validation(_))));
    assert_eq!(repo.books_count().await.unwrap(), 0);
}
