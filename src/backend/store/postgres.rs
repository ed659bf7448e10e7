/**
 * PostgreSQL Storage Adapter
 *
 * Implements `BlogStore` with sqlx queries against the schema in
 * `migrations/`. Joined reads use flat row structs which are folded back
 * into the port's record types.
 *
 * Constraint violations are classified by `StoreError::from(sqlx::Error)`:
 * unique violations become `Conflict`, foreign-key violations become
 * `MissingReference`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::store::{
    BlogStore, CommentRecord, CommentWithOwner, NewComment, NewPost, NewUser, PostChanges,
    PostListing, PostRecord, PostWithOwner, StoreResult, UserRecord,
};
use crate::shared::UserSummary;

/// Post joined with its owner's public columns
#[derive(Debug, sqlx::FromRow)]
struct PostOwnerRow {
    id: Uuid,
    title: String,
    content: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_username: String,
    owner_email: String,
    comment_count: i64,
}

impl PostOwnerRow {
    fn split(self) -> (PostRecord, UserSummary, i64) {
        let owner = UserSummary {
            id: self.user_id,
            username: self.owner_username,
            email: self.owner_email,
        };
        let post = PostRecord {
            id: self.id,
            title: self.title,
            content: self.content,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        (post, owner, self.comment_count)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CommentOwnerRow {
    id: Uuid,
    content: String,
    user_id: Uuid,
    post_id: Uuid,
    created_at: DateTime<Utc>,
    owner_username: String,
    owner_email: String,
}

impl From<CommentOwnerRow> for CommentWithOwner {
    fn from(row: CommentOwnerRow) -> Self {
        Self {
            owner: UserSummary {
                id: row.user_id,
                username: row.owner_username,
                email: row.owner_email,
            },
            comment: CommentRecord {
                id: row.id,
                content: row.content,
                user_id: row.user_id,
                post_id: row.post_id,
                created_at: row.created_at,
            },
        }
    }
}

const POST_WITH_OWNER_SELECT: &str = r#"
    SELECT p.id, p.title, p.content, p.user_id, p.created_at, p.updated_at,
           u.username AS owner_username, u.email AS owner_email,
           (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

/// sqlx-backed store
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded migrations
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<UserRecord> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn identity_taken(&self, username: &str, email: &str) -> StoreResult<bool> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn insert_post(&self, post: NewPost) -> StoreResult<PostRecord> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, PostRecord>(
            r#"
            INSERT INTO posts (id, title, content, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, content, user_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_post_by_id(&self, id: Uuid) -> StoreResult<Option<PostRecord>> {
        let record = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_post_with_owner(&self, id: Uuid) -> StoreResult<Option<PostWithOwner>> {
        let query = format!("{POST_WITH_OWNER_SELECT} WHERE p.id = $1");
        let row = sqlx::query_as::<_, PostOwnerRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| {
            let (post, owner, _) = row.split();
            PostWithOwner { post, owner }
        }))
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostListing>> {
        let query = format!("{POST_WITH_OWNER_SELECT} ORDER BY p.created_at DESC, p.id DESC");
        let rows = sqlx::query_as::<_, PostOwnerRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let (post, owner, comment_count) = row.split();
                PostListing { post, owner, comment_count }
            })
            .collect())
    }

    async fn update_post(&self, id: Uuid, changes: PostChanges) -> StoreResult<Option<PostRecord>> {
        let record = sqlx::query_as::<_, PostRecord>(
            r#"
            UPDATE posts
            SET title = COALESCE($1, title),
                content = COALESCE($2, content),
                updated_at = $3
            WHERE id = $4
            RETURNING id, title, content, user_id, created_at, updated_at
            "#,
        )
        .bind(changes.title)
        .bind(changes.content)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        // comments go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<CommentRecord> {
        let record = sqlx::query_as::<_, CommentRecord>(
            r#"
            INSERT INTO comments (id, content, user_id, post_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, user_id, post_id, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&comment.content)
        .bind(comment.user_id)
        .bind(comment.post_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn comments_for_post(&self, post_id: Uuid) -> StoreResult<Vec<CommentWithOwner>> {
        let rows = sqlx::query_as::<_, CommentOwnerRow>(
            r#"
            SELECT c.id, c.content, c.user_id, c.post_id, c.created_at,
                   u.username AS owner_username, u.email AS owner_email
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC, c.id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentWithOwner::from).collect())
    }
}
