use sigma_books::adapters::sqlite::SqliteBookRepository;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// テスト用のインメモリSQLiteプールを作成
///
/// 接続を1本に固定することで、インメモリデータベースがテスト内の
/// すべてのクエリから同じ内容に見えることを保証します。
/// テストごとに独立したデータベースになるため、後片付けは不要です。
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database")
}

/// テスト用のリポジトリを作成し、スキーマを同期
///
/// 本番と同じ init_schema を使用することで、
/// テストと本番のテーブル定義の一貫性を保証します。
pub async fn create_test_repository() -> SqliteBookRepository {
    let pool = create_test_pool().await;
    let repository = SqliteBookRepository::new(pool);

    repository
        .init_schema()
        .await
        .expect("Failed to synchronize database schema");

    repository
}
