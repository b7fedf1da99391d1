use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    /// Path of the stored image, as returned by the image storage.
    pub image_url: String,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub image_url: String,
}

/// Changes applied by an update. `None` leaves the field untouched.
#[derive(Debug, Default, Clone)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub image_url: Option<String>,
}

impl ProductChanges {
    /// A present name or description must not be blank and a present price
    /// must be finite.
    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ProductError::NameEmpty);
        }
        if let Some(description) = &self.description
            && description.trim().is_empty()
        {
            return Err(ProductError::DescriptionEmpty);
        }
        if let Some(price) = self.price
            && !price.is_finite()
        {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }
}

impl Product {
    pub fn new(id: ProductId, props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if !props.price.is_finite() {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id,
            name: props.name,
            description: props.description,
            price: props.price,
            quantity: props.quantity,
            image_url: props.image_url,
        })
    }

    /// Applies the present fields of `changes`, returning the replaced image path
    /// when the image changed. A new path equal to the current one replaces
    /// nothing.
    pub fn apply(&mut self, changes: ProductChanges) -> Result<Option<String>, ProductError> {
        changes.validate()?;

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }

        Ok(changes.image_url.and_then(|url| {
            let previous = std::mem::replace(&mut self.image_url, url);
            (previous != self.image_url).then_some(previous)
        }))
    }
}

/// A product together with its image contents, base64 encoded.
#[derive(Debug, Clone)]
pub struct ProductWithImage {
    pub product: Product,
    pub image: String,
}

impl ProductWithImage {
    pub fn new(product: Product, image_bytes: &[u8]) -> Self {
        Self {
            product,
            image: STANDARD.encode(image_bytes),
        }
    }
}
