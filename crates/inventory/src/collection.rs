use stockroom_core::{DomainError, DomainResult, Money};
use stockroom_products::Product;

/// Sum of every product's inventory value.
pub fn total_value(products: &[Product]) -> Money {
    products.iter().map(Product::inventory_value).sum()
}

/// Ordered collection of products.
///
/// Products are addressed by insertion position; order only matters for
/// display and reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> DomainResult<&mut Product> {
        self.products
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found(index))
    }

    pub fn total_value(&self) -> Money {
        total_value(&self.products)
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
