use crate::error::FilterError;
use crate::product::Product;

/// Optional predicates narrowing a product listing. All set predicates must
/// match; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive exact match on `category`.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Case-insensitive substring match on `name`.
    pub name: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build a filter from raw query text. Empty values count as absent.
    ///
    /// ```rust
    /// use store::ProductFilter;
    ///
    /// let filter = ProductFilter::from_query(Some("Electronics"), Some("900"), None, Some("")).unwrap();
    /// assert_eq!(filter.category.as_deref(), Some("Electronics"));
    /// assert_eq!(filter.min_price, Some(900.0));
    /// assert!(filter.name.is_none());
    ///
    /// assert!(ProductFilter::from_query(None, Some("cheap"), None, None).is_err());
    /// ```
    pub fn from_query(
        category: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            category: non_empty(category).map(str::to_owned),
            min_price: parse_bound("minPrice", min_price)?,
            max_price: parse_bound("maxPrice", max_price)?,
            name: non_empty(name).map(str::to_owned),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.name.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

fn parse_bound(param: &'static str, raw: Option<&str>) -> Result<Option<f64>, FilterError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|bound| bound.is_finite())
        .map(Some)
        .ok_or_else(|| FilterError::InvalidPriceBound {
            param,
            value: raw.to_owned(),
        })
}
