use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::product::model::{Product, ProductWithImage};
use business::domain::product::storage::ImageUpload;

/// Multipart body for `POST /products`.
///
/// Fields are optional at the parsing level so that missing ones are reported
/// with the product validation error rather than a generic parse failure.
#[derive(Multipart)]
pub struct CreateProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub image: Option<Upload>,
}

/// Multipart body for `PUT /products`. Only `productId` is required.
#[derive(Multipart)]
pub struct UpdateProductForm {
    #[oai(rename = "productId")]
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub image: Option<Upload>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct DeleteProductRequest {
    /// Identifier of the product to delete
    pub product_id: Option<u64>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    /// Path of the stored image
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            image_url: product.image_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductWithImageResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub image_url: String,
    /// Image file contents, base64 encoded
    pub image: String,
}

impl From<ProductWithImage> for ProductWithImageResponse {
    fn from(value: ProductWithImage) -> Self {
        let product = value.product;
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            image_url: product.image_url,
            image: value.image,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

/// Reads an uploaded file into memory.
pub async fn read_upload(upload: Option<Upload>) -> std::io::Result<Option<ImageUpload>> {
    let Some(upload) = upload else {
        return Ok(None);
    };
    let file_name = upload.file_name().map(str::to_string);
    let bytes = upload.into_vec().await?;
    Ok(Some(ImageUpload { file_name, bytes }))
}
