//! In-memory API used by `--demo` mode.

use async_trait::async_trait;

use super::{ApiError, CategoryFigures, Employee, PerformanceApi, RatingCategory};

/// Serves a fixed sample data set without touching the network.
#[derive(Debug, Clone)]
pub struct DemoApi {
    employees: Vec<Employee>,
    categories: Vec<RatingCategory>,
    actual: CategoryFigures,
    deviations: CategoryFigures,
    suggestions: Vec<Employee>,
}

impl Default for DemoApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoApi {
    pub fn new() -> Self {
        let employees = vec![
            employee(1, "Ann Lee", "A"),
            employee(2, "Bob Smith", "B"),
            employee(3, "Chitra Rao", "B"),
            employee(4, "Dmitri Volkov", "C"),
            employee(5, "Elena Gomez", "B"),
            employee(6, "Farid Haddad", "A"),
            employee(7, "Grace Kim", "D"),
            employee(8, "Hiro Tanaka", "E"),
        ];

        let categories = vec![
            category("A", 20.0),
            category("B", 25.0),
            category("C", 30.0),
            category("D", 15.0),
            category("E", 10.0),
        ];

        let actual: CategoryFigures = [("A", 25.0), ("B", 37.5), ("C", 12.5), ("D", 12.5), ("E", 12.5)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let deviations = categories
            .iter()
            .map(|c| {
                let observed = actual.get(&c.category).unwrap_or(0.0);
                (c.category.clone(), observed - c.standard_percentage)
            })
            .collect();

        let suggestions = vec![employee(2, "Bob Smith", "C"), employee(6, "Farid Haddad", "B")];

        Self {
            employees,
            categories,
            actual,
            deviations,
            suggestions,
        }
    }
}

fn employee(id: u64, name: &str, rating: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        rating: rating.to_string(),
    }
}

fn category(name: &str, standard_percentage: f64) -> RatingCategory {
    RatingCategory {
        category: name.to_string(),
        standard_percentage,
    }
}

#[async_trait]
impl PerformanceApi for DemoApi {
    async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        Ok(self.employees.clone())
    }

    async fn rating_categories(&self) -> Result<Vec<RatingCategory>, ApiError> {
        Ok(self.categories.clone())
    }

    async fn actual_percentages(&self) -> Result<CategoryFigures, ApiError> {
        Ok(self.actual.clone())
    }

    async fn deviations(&self) -> Result<CategoryFigures, ApiError> {
        Ok(self.deviations.clone())
    }

    async fn suggested_adjustments(&self) -> Result<Vec<Employee>, ApiError> {
        Ok(self.suggestions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_deviations_match_actual_minus_standard() {
        let api = DemoApi::new();
        assert_eq!(api.deviations.get("A"), Some(5.0));
        assert_eq!(api.deviations.get("C"), Some(-17.5));
        assert_eq!(api.deviations.len(), api.categories.len());
    }
}
