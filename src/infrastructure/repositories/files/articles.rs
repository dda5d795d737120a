use super::{ArticleMetaRecord, FileStore, read_optional, remove_if_exists, write_atomic};
use crate::domain::article::{
    Article, ArticleReadRepository, ArticleSlug, ArticleSummary, ArticleWriteRepository,
    NewArticle, newest_first,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::io;
use tokio::fs;

/// What was stored under a slug before a write, so the write can be undone.
pub(super) struct ArticleSnapshot {
    slug: String,
    html: Option<Vec<u8>>,
    index: Vec<ArticleMetaRecord>,
}

impl FileStore {
    async fn load_index(&self) -> DomainResult<Vec<ArticleMetaRecord>> {
        self.load_json(&self.index_path()).await
    }

    async fn store_index(&self, index: &[ArticleMetaRecord]) -> DomainResult<()> {
        self.store_json(&self.index_path(), index).await
    }

    pub(super) async fn snapshot_article(&self, slug: &ArticleSlug) -> DomainResult<ArticleSnapshot> {
        Ok(ArticleSnapshot {
            slug: slug.as_str().to_owned(),
            html: read_optional(&self.article_path(slug.as_str())).await?,
            index: self.load_index().await?,
        })
    }

    pub(super) async fn restore_article(&self, snapshot: ArticleSnapshot) -> DomainResult<()> {
        let path = self.article_path(&snapshot.slug);
        match snapshot.html {
            Some(bytes) => write_atomic(&path, &bytes).await?,
            None => {
                remove_if_exists(&path).await?;
            }
        }
        self.store_index(&snapshot.index).await
    }

    /// Write the document and its metadata. Caller holds the write lock.
    pub(super) async fn write_article(&self, article: NewArticle) -> DomainResult<Article> {
        let mut index = self.load_index().await?;
        let slug = article.slug.as_str();
        let position = index.iter().position(|m| m.slug == slug);
        let created_at = position
            .and_then(|i| index[i].created_at)
            .unwrap_or(article.created_at);

        let stored = Article {
            slug: article.slug,
            title: article.title,
            author: article.author,
            description: article.description,
            content: article.content,
            category: article.category,
            created_at: Some(created_at),
        };

        write_atomic(&self.article_path(stored.slug.as_str()), stored.content.as_bytes()).await?;
        let meta = ArticleMetaRecord::from_article(&stored);
        match position {
            Some(i) => index[i] = meta,
            None => index.push(meta),
        }
        self.store_index(&index).await?;
        Ok(stored)
    }

    fn summary_for(&self, slug: ArticleSlug, index: &[ArticleMetaRecord]) -> ArticleSummary {
        match index.iter().find(|m| m.slug == slug.as_str()) {
            Some(meta) => meta.clone().into_summary(slug),
            None => ArticleSummary::untracked(slug),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for FileStore {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let Some(bytes) = read_optional(&self.article_path(slug.as_str())).await? else {
            return Ok(None);
        };
        let content = String::from_utf8(bytes)
            .map_err(|err| DomainError::Storage(format!("article {slug} is not utf-8: {err}")))?;
        let index = self.load_index().await?;
        let summary = self.summary_for(slug.clone(), &index);
        Ok(Some(Article {
            slug: summary.slug,
            title: summary.title,
            author: summary.author,
            description: summary.description,
            content,
            category: summary.category,
            created_at: summary.created_at,
        }))
    }

    async fn list(&self) -> DomainResult<Vec<ArticleSummary>> {
        let index = self.load_index().await?;
        let mut entries = match fs::read_dir(self.articles_dir()).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut summaries = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match ArticleSlug::new(stem) {
                Ok(slug) => summaries.push(self.summary_for(slug, &index)),
                Err(_) => {
                    tracing::warn!(file = %path.display(), "ignoring article file with invalid slug");
                }
            }
        }
        summaries.sort_by(newest_first);
        Ok(summaries)
    }
}

#[async_trait]
impl ArticleWriteRepository for FileStore {
    async fn save(&self, article: NewArticle) -> DomainResult<Article> {
        let _guard = self.write_lock.lock().await;
        self.write_article(article).await
    }

    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        if !remove_if_exists(&self.article_path(slug.as_str())).await? {
            return Err(DomainError::NotFound(format!("article {slug}")));
        }
        let mut index = self.load_index().await?;
        let before = index.len();
        index.retain(|m| m.slug != slug.as_str());
        if index.len() != before {
            self.store_index(&index).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn new_article(slug: &str, minutes: i64) -> NewArticle {
        NewArticle {
            slug: ArticleSlug::new(slug).unwrap(),
            title: format!("Title {slug}"),
            author: "etc_dev".into(),
            description: "desc".into(),
            content: format!("<html>{slug}</html>"),
            category: Category::default(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    async fn store() -> (TempDir, FileStore) {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();
        (tmp, store)
    }

    #[tokio::test]
    async fn save_then_find_returns_document_and_metadata() {
        let (_tmp, store) = store().await;
        store.save(new_article("hello", 0)).await.unwrap();

        let slug = ArticleSlug::new("hello").unwrap();
        let found = store.find_by_slug(&slug).await.unwrap().unwrap();
        assert_eq!(found.content, "<html>hello</html>");
        assert_eq!(found.title, "Title hello");
        assert!(store.article_path("hello").is_file());
    }

    #[tokio::test]
    async fn overwrite_keeps_original_timestamp() {
        let (_tmp, store) = store().await;
        let first = store.save(new_article("same", 0)).await.unwrap();
        let mut second = new_article("same", 30);
        second.title = "Replaced".into();
        let saved = store.save(second).await.unwrap();

        assert_eq!(saved.created_at, first.created_at);
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Replaced");
    }

    #[tokio::test]
    async fn list_orders_newest_first_with_untracked_last() {
        let (_tmp, store) = store().await;
        store.save(new_article("older", 0)).await.unwrap();
        store.save(new_article("newer", 10)).await.unwrap();
        std::fs::write(store.article_path("legacy-post"), "<p>old</p>").unwrap();
        std::fs::write(store.articles_dir().join("Not A Slug.html"), "x").unwrap();
        std::fs::write(store.articles_dir().join("notes.txt"), "x").unwrap();

        let slugs: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.slug.into_inner())
            .collect();
        assert_eq!(slugs, vec!["newer", "older", "legacy-post"]);
    }

    /// メタデータのない記事はスラッグから補完される
    #[tokio::test]
    async fn untracked_article_gets_defaults() {
        let (_tmp, store) = store().await;
        std::fs::write(store.article_path("legacy-post"), "<p>old</p>").unwrap();
        let found = store
            .find_by_slug(&ArticleSlug::new("legacy-post").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.title, "legacy post");
        assert_eq!(found.author, "Admin User");
        assert!(found.created_at.is_none());
    }

    #[tokio::test]
    async fn delete_removes_file_and_metadata() {
        let (_tmp, store) = store().await;
        store.save(new_article("gone", 0)).await.unwrap();
        let slug = ArticleSlug::new("gone").unwrap();
        store.delete(&slug).await.unwrap();

        assert!(store.find_by_slug(&slug).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
        let err = store.delete(&slug).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
