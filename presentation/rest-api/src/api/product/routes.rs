use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update_quantity::{
    UpdateProductQuantityParams, UpdateProductQuantityUseCase,
};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, MutationResponse, ProductEnvelope, ProductListResponse,
    ProductResponse, UpdateQuantityRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_quantity_use_case: Arc<dyn UpdateProductQuantityUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_quantity_use_case: Arc<dyn UpdateProductQuantityUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_quantity_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    raw.parse::<ProductId>().map_err(|err: ProductError| {
        let (_, json) = err.into_error_response();
        json
    })
}

/// Inventory API
///
/// Endpoints for creating, listing, reading, restocking, and deleting products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The store assigns the id. Fails with 409 when the code is already taken.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            code: body.0.code,
            description: body.0.description,
            quantity: body.0.quantity,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every product ordered by name ascending.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let products: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(ProductListResponse { products }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(ProductEnvelope {
                product: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product's quantity
    ///
    /// Overwrites the stock count. Quantity is the only mutable field.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product_quantity(
        &self,
        id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> UpdateQuantityResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateQuantityResponse::BadRequest(json),
        };

        let params = UpdateProductQuantityParams {
            id,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(affected_rows) => UpdateQuantityResponse::Ok(Json(MutationResponse {
                message: format!("Product {} updated successfully.", id),
                affected_rows,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateQuantityResponse::BadRequest(json),
                    404 => UpdateQuantityResponse::NotFound(json),
                    _ => UpdateQuantityResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product. Its id is never handed out again.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(affected_rows) => DeleteProductResponse::Ok(Json(MutationResponse {
                message: format!("Product {} deleted successfully.", id),
                affected_rows,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(ErrorResponse::invalid_request(&err))
}

#[derive(ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_by_id_bad_request")]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_by_id_bad_request(err: poem::Error) -> GetProductByIdResponse {
    GetProductByIdResponse::BadRequest(ErrorResponse::invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_quantity_bad_request")]
pub enum UpdateQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<MutationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_quantity_bad_request(err: poem::Error) -> UpdateQuantityResponse {
    UpdateQuantityResponse::BadRequest(ErrorResponse::invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_bad_request")]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MutationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn delete_bad_request(err: poem::Error) -> DeleteProductResponse {
    DeleteProductResponse::BadRequest(ErrorResponse::invalid_request(&err))
}
