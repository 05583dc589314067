use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, serde_helpers::chrono_datetime_as_bson_datetime, Bson, Document},
    options::{ClientOptions, WriteConcern},
    Client, Collection,
};
use primitives::{config::MongoConfig, Ad, Condition, Predicate};
use serde::{Deserialize, Deserializer, Serialize};
use slog::{info, Logger};

use super::{AdId, AdStore, StoreError};

/// [`AdStore`] backed by a MongoDB collection.
///
/// The [`Client`] keeps its own connection pool and is shared by all requests.
#[derive(Debug, Clone)]
pub struct MongoAdStore {
    client: Client,
    collection: Collection<AdDocument>,
}

impl MongoAdStore {
    /// Connects to the server and pings the database to make sure it's reachable.
    ///
    /// Writes are acknowledged within `write_timeout`.
    pub async fn connect(
        config: &MongoConfig,
        write_timeout: Duration,
        logger: &Logger,
    ) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(StoreError::Connection)?;
        options.app_name = Some("adserver".to_string());
        options.write_concern = Some(write_concern(write_timeout));

        let client = Client::with_options(options).map_err(StoreError::Connection)?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(StoreError::Connection)?;

        info!(logger, "Connected to MongoDB"; "database" => &config.database, "collection" => &config.collection);

        Ok(Self {
            collection: database.collection(&config.collection),
            client,
        })
    }

    /// Closes all pooled connections.
    pub async fn close(self) {
        self.client.shutdown().await
    }
}

#[async_trait]
impl AdStore for MongoAdStore {
    async fn insert_ad(&self, ad: &Ad) -> Result<AdId, StoreError> {
        let result = self
            .collection
            .insert_one(AdDocument::from(ad), None)
            .await?;

        let id = match result.inserted_id {
            Bson::ObjectId(object_id) => object_id.to_hex(),
            other => other.to_string(),
        };

        Ok(AdId(id))
    }

    async fn find_ads(&self, predicate: &Predicate) -> Result<Vec<Ad>, StoreError> {
        let cursor = self
            .collection
            .find(filter_document(predicate), None)
            .await?;

        let documents = cursor.try_collect::<Vec<_>>().await?;

        Ok(documents.into_iter().map(Ad::from).collect())
    }
}

fn write_concern(timeout: Duration) -> WriteConcern {
    WriteConcern::builder().w_timeout(timeout).build()
}

/// A dimension left out of a condition can be stored as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The persisted layout of an [`Ad`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdDocument {
    pub title: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub startat: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub endat: DateTime<Utc>,
    #[serde(default)]
    pub conditions: Vec<ConditionDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDocument {
    #[serde(default)]
    pub agestart: u32,
    #[serde(default)]
    pub ageend: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gender: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platform: Vec<String>,
}

impl From<&Ad> for AdDocument {
    fn from(ad: &Ad) -> Self {
        Self {
            title: ad.title.clone(),
            startat: ad.start_at,
            endat: ad.end_at,
            conditions: ad
                .conditions
                .iter()
                .map(|condition| ConditionDocument {
                    agestart: condition.age_start,
                    ageend: condition.age_end,
                    gender: condition.gender.clone(),
                    country: condition.country.clone(),
                    platform: condition.platform.clone(),
                })
                .collect(),
        }
    }
}

impl From<AdDocument> for Ad {
    fn from(document: AdDocument) -> Self {
        Self {
            title: document.title,
            start_at: document.startat,
            end_at: document.endat,
            conditions: document
                .conditions
                .into_iter()
                .map(|condition| Condition {
                    age_start: condition.agestart,
                    age_end: condition.ageend,
                    gender: condition.gender,
                    country: condition.country,
                    platform: condition.platform,
                })
                .collect(),
        }
    }
}

/// Matches documents with at least one condition satisfying `condition_query`.
///
/// `$elemMatch` makes sure that all the fields are checked on the same condition.
fn any_condition(condition_query: Document) -> Document {
    doc! { "conditions": { "$elemMatch": condition_query } }
}

/// Translates a [`Predicate`] into a MongoDB query filter on the [`AdDocument`] layout.
pub fn filter_document(predicate: &Predicate) -> Document {
    match predicate {
        Predicate::All(predicates) if predicates.is_empty() => Document::new(),
        Predicate::All(predicates) => {
            let clauses = predicates.iter().map(filter_document).collect::<Vec<_>>();
            doc! { "$and": clauses }
        }
        // `$or` requires a non-empty array, `$nor` of an always true query matches nothing
        Predicate::Any(predicates) if predicates.is_empty() => doc! { "$nor": [{}] },
        Predicate::Any(predicates) => {
            let clauses = predicates.iter().map(filter_document).collect::<Vec<_>>();
            doc! { "$or": clauses }
        }
        Predicate::ActiveAt(at) => {
            doc! { "endat": { "$gt": bson::DateTime::from_chrono(*at) } }
        }
        Predicate::AgeWithin(age) => {
            let age = i64::from(*age);
            any_condition(doc! { "agestart": { "$lte": age }, "ageend": { "$gte": age } })
        }
        Predicate::AgeUnrestricted => any_condition(doc! { "agestart": 0, "ageend": 0 }),
        // equality on an array field matches its members
        Predicate::Includes(dimension, value) => {
            any_condition(doc! { dimension.as_str(): value.as_str() })
        }
        // either missing, `null` or an empty array
        Predicate::Unrestricted(dimension) => any_condition(
            doc! { dimension.as_str(): { "$in": [Bson::Null, Bson::Array(vec![])] } },
        ),
    }
}
