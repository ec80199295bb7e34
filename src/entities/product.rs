//! Storefront products: motorcycles, parts and accessories

use crate::core::field::FieldValue;
use crate::core::filter::{FilterConfig, SortDirection, SortKind, SortOption};
use crate::core::item::ListItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What kind of product this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Motorcycle,
    Part,
    Accessory,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Motorcycle => "motorcycle",
            ProductCategory::Part => "part",
            ProductCategory::Accessory => "accessory",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

crate::list_fields! {
    /// Searchable and sortable fields of a [`Product`]
    pub enum ProductField {
        Id => "id",
        Name => "name",
        Brand => "brand",
        Category => "category",
        Price => "price",
        Stock => "stock",
        CreatedAt => "created_at",
        Description => "description",
    }
}

/// A product listed in the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub category: ProductCategory,
    /// Unit price in the shop currency
    pub price: f64,
    /// Units in stock
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        category: ProductCategory,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: brand.into(),
            category,
            price,
            stock,
            created_at: Utc::now(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl ListItem for Product {
    type Field = ProductField;

    fn resource_name() -> &'static str {
        "products"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field(&self, field: ProductField) -> FieldValue {
        match field {
            ProductField::Id => self.id.to_string().into(),
            ProductField::Name => self.name.as_str().into(),
            ProductField::Brand => self.brand.as_str().into(),
            ProductField::Category => self.category.as_str().into(),
            ProductField::Price => self.price.into(),
            ProductField::Stock => self.stock.into(),
            ProductField::CreatedAt => self.created_at.into(),
            ProductField::Description => self.description.as_deref().into(),
        }
    }
}

/// The product list's search fields and sort dropdown
pub fn product_filter_config() -> FilterConfig<Product> {
    FilterConfig::new()
        .search_field(ProductField::Name)
        .search_field(ProductField::Brand)
        .search_field(ProductField::Category)
        .search_field(ProductField::Description)
        .sort_option(SortOption::by_field(
            "Name: A-Z",
            ProductField::Name,
            SortKind::String,
            SortDirection::Asc,
        ))
        .sort_option(SortOption::by_field(
            "Name: Z-A",
            ProductField::Name,
            SortKind::String,
            SortDirection::Desc,
        ))
        .sort_option(SortOption::by_field(
            "Price: Low to High",
            ProductField::Price,
            SortKind::Number,
            SortDirection::Asc,
        ))
        .sort_option(SortOption::by_field(
            "Price: High to Low",
            ProductField::Price,
            SortKind::Number,
            SortDirection::Desc,
        ))
        .sort_option(SortOption::by_field(
            "Newest",
            ProductField::CreatedAt,
            SortKind::Date,
            SortDirection::Desc,
        ))
        .sort_option(SortOption::by_field(
            "Oldest",
            ProductField::CreatedAt,
            SortKind::Date,
            SortDirection::Asc,
        ))
        .sort_option(SortOption::custom(
            "In Stock First",
            |a: &Product, b: &Product| b.in_stock().cmp(&a.in_stock()),
        ))
}

/// A small catalog for local development
pub fn demo_catalog() -> Vec<Product> {
    use ProductCategory::*;

    vec![
        Product::new("Tenere 700", "Yamaha", Motorcycle, 10_499.0, 3)
            .with_description("Twin-cylinder adventure bike"),
        Product::new("MT-07", "Yamaha", Motorcycle, 7_999.0, 5),
        Product::new("Africa Twin", "Honda", Motorcycle, 14_999.0, 0)
            .with_description("Long-range adventure tourer"),
        Product::new("390 Duke", "KTM", Motorcycle, 5_899.0, 4),
        Product::new("Chain Lube 400ml", "Motul", Part, 14.5, 120),
        Product::new("Brake Pads (front)", "EBC", Part, 39.9, 35),
        Product::new("Oil Filter HF204", "HiFlo", Part, 9.5, 80),
        Product::new("Spark Plug CR9EK", "NGK", Part, 12.0, 0),
        Product::new("Full-Face Helmet", "Shoei", Accessory, 649.0, 7)
            .with_description("Touring helmet with sun visor"),
        Product::new("Riding Gloves", "Alpinestars", Accessory, 79.0, 22),
        Product::new("Tank Bag 15L", "SW-Motech", Accessory, 189.0, 9),
        Product::new("Phone Mount", "Quad Lock", Accessory, 59.9, 0),
    ]
}
