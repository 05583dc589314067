use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::{ConnectInfo, RawQuery},
    http::HeaderMap,
    Extension, Json,
};
use chrono::Utc;
use primitives::api::{AdListQuery, AdListResponse, CreateAd, CreateAdResponse, ValidationError};
use slog::{debug, error, info};

use crate::{ads, db::AdStore, response::ResponseError, Application};

fn client_addr(connect_info: &Option<ConnectInfo<SocketAddr>>) -> String {
    connect_info
        .as_ref()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// `POST /api/v1/ad`
pub async fn create_ad<S: AdStore + 'static>(
    Extension(app): Extension<Arc<Application<S>>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateAdResponse>, ResponseError> {
    let logger = &app.logger;

    debug!(logger, "POST Ad request"; "from" => client_addr(&connect_info), "headers" => ?&headers);

    let ad = serde_json::from_slice::<CreateAd>(&body)
        .map_err(|e| ValidationError::Malformed(e.to_string()))?
        .into_ad()?;

    info!(logger, "POST Ad"; "from" => client_addr(&connect_info), "ad" => ?&ad);

    if let Err(err) = ads::insert_ad(&app.store, &ad, app.config.query_timeout(), logger).await {
        error!(logger, "{}", &err; "module" => "create_ad");

        return Err(err.into());
    }

    Ok(Json(CreateAdResponse::created(&ad.title)))
}

/// `GET /api/v1/ad`
pub async fn list_ads<S: AdStore + 'static>(
    Extension(app): Extension<Arc<Application<S>>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Json<AdListResponse>, ResponseError> {
    let logger = &app.logger;

    debug!(logger, "GET Ads request"; "from" => client_addr(&connect_info), "headers" => ?&headers);

    let query = serde_qs::from_str::<AdListQuery>(query.as_deref().unwrap_or_default())
        .map_err(|e| ValidationError::Malformed(e.to_string()))?;

    let (pagination, targeting) = query.validate()?;

    info!(logger, "GET Ads"; "from" => client_addr(&connect_info), "offset" => pagination.offset, "limit" => pagination.limit, "targeting" => ?&targeting);

    let ads = ads::query_ads(
        &app.store,
        &targeting,
        pagination,
        Utc::now(),
        app.config.query_timeout(),
        logger,
    )
    .await
    .map_err(|err| {
        error!(logger, "{}", &err; "module" => "list_ads");
        ResponseError::from(err)
    })?;

    Ok(Json(ads.into_iter().collect()))
}
