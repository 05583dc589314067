//! Ad server REST API documentation
//!
//! All routes are listed below:
//! - [POST `/api/v1/ad`](#post-apiv1ad)
//! - [GET `/api/v1/ad`](#get-apiv1ad)
//!
//! Failed requests always respond with a JSON body `{ "error": "<message>" }`
//! (see [`ResponseError`](crate::response::ResponseError)):
//! - `400 Bad Request` for invalid input or an `offset` past the end of the results
//! - `500 Internal Server Error` when the store fails or doesn't respond in time
//!
//! #### POST `/api/v1/ad`
//!
//! Creates a new Ad. The `title`, `startAt` and `endAt` are required. When no
//! `conditions` are passed, the Ad is shown to everyone.
//!
//! The route is handled by [`ad::create_ad()`].
//!
//! Request body: [`CreateAd`](primitives::api::CreateAd)
//!
//! Response: [`CreateAdResponse`](primitives::api::CreateAdResponse)
//!
//! ```json
//! {
//!   "title": "AD 55",
//!   "startAt": "2023-12-10T03:00:00.000Z",
//!   "endAt": "2023-12-31T16:00:00.000Z",
//!   "conditions": [
//!     { "ageStart": 20, "ageEnd": 30, "country": ["TW", "JP"], "platform": ["android", "ios"] }
//!   ]
//! }
//! ```
//!
//! #### GET `/api/v1/ad`
//!
//! Lists the currently active Ads which match the targeting, the soonest expiring first.
//!
//! The route is handled by [`ad::list_ads()`].
//!
//! Request query parameters: [`AdListQuery`](primitives::api::AdListQuery)
//!
//! - `offset` - 1-based, in `[1, 100]`, defaults to `5`
//! - `limit` - in `[1, 100]`, defaults to `5`
//! - `age`, `gender`, `country`, `platform` - optional targeting
//!
//! Response: [`AdListResponse`](primitives::api::AdListResponse)
//!
//! ```json
//! { "items": [{ "title": "AD 1", "endAt": "2023-12-22T01:00:00.000Z" }] }
//! ```

pub use ad::{create_ad, list_ads};

pub mod ad;

pub const ROUTE_AD: &str = "/api/v1/ad";
