#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use quill_core::domain::Post;
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{
        DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, RuntimeErr,
    };
    use uuid::Uuid;

    fn post_repo(db: DatabaseConnection) -> Box<dyn PostRepository> {
        Box::new(PostgresPostRepository::new(db))
    }

    fn model(id: Uuid, like_count: i64) -> post::Model {
        post::Model {
            id,
            image: "https://placehold.co/600x400?text=No+Image".to_owned(),
            category: "rust".to_owned(),
            title: "Test Post".to_owned(),
            description: "Content".to_owned(),
            author_name: "Sam".to_owned(),
            author_img: "https://cdn.example.com/sam.png".to_owned(),
            date: "2024-05-01T12:30:00.000Z".to_owned(),
            like_count,
            like_isliked: false,
            read_time: "1 min read".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, 3)]])
            .into_connection();

        let repo = post_repo(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.author.name, "Sam");
        assert_eq!(post.like.count, 3);
    }

    #[tokio::test]
    async fn test_increment_like_returns_updated_row() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, 4)]])
            .into_connection();

        let repo = post_repo(db);

        let post = repo.increment_like(post_id, 1).await.unwrap().unwrap();
        assert_eq!(post.like.count, 4);
    }

    #[tokio::test]
    async fn test_increment_like_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = post_repo(db);

        let result = repo.increment_like(Uuid::new_v4(), -1).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = post_repo(db);

        let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_all_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let repo = post_repo(db);

        assert_eq!(repo.delete_all().await.unwrap(), 3);
    }

    /// SQL of the single statement a mock connection recorded.
    fn logged_sql(db: DatabaseConnection) -> String {
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        format!("{:?}", log[0])
    }

    #[tokio::test]
    async fn test_update_content_never_writes_like_count() {
        let post_id = Uuid::new_v4();
        let mut row = model(post_id, 7);
        row.title = "Renamed".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let mut stale: Post = model(post_id, 0).into();
        stale.title = "Renamed".to_owned();
        let updated = PostRepository::update_content(&repo, stale).await.unwrap();
        assert_eq!(updated.id, post_id);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.like.count, 7);

        // like_isliked is in SET and RETURNING, like_count only in RETURNING.
        let sql = logged_sql(repo.db);
        assert!(sql.contains("UPDATE"));
        assert_eq!(
            sql.matches("like_count").count() + 1,
            sql.matches("like_isliked").count()
        );
    }

    #[tokio::test]
    async fn test_update_content_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = post_repo(db);

        let err = repo
            .update_content(model(Uuid::new_v4(), 0).into())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_insert_batch_is_single_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts: Vec<Post> = (0..3).map(|i| model(Uuid::new_v4(), i).into()).collect();
        let inserted = BaseRepository::<Post, Uuid>::insert_many(&repo, posts.clone())
            .await
            .unwrap();
        assert_eq!(inserted, posts);

        assert!(logged_sql(repo.db).contains("INSERT INTO"));
    }

    #[tokio::test]
    async fn test_delete_existing_row_returns_it() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, 5)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = post_repo(db);

        let deleted: Post = repo.delete(post_id).await.unwrap();
        assert_eq!(deleted.id, post_id);
        assert_eq!(deleted.like.count, 5);
    }

    #[tokio::test]
    async fn test_increment_like_out_of_range() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "bigint out of range".to_owned(),
            ))])
            .into_connection();

        let repo = post_repo(db);

        let err = repo.increment_like(Uuid::new_v4(), 1).await.unwrap_err();
        assert!(matches!(err, RepoError::OutOfRange(_)));
    }
}
