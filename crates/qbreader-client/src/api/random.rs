//! Random question and set name endpoints.

use super::{join, validate};
use crate::QbReaderClient;
use qbreader_core::{Bonus, BonusRecord, Category, Difficulty, Result, Tossup, TossupRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TossupsResponse {
    tossups: Vec<TossupRecord>,
}

#[derive(Debug, Deserialize)]
struct BonusesResponse {
    bonuses: Vec<BonusRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RandomNameResponse {
    random_name: String,
}

/// Random question endpoints
pub struct RandomApi<'a> {
    client: &'a QbReaderClient,
}

impl<'a> RandomApi<'a> {
    pub(crate) fn new(client: &'a QbReaderClient) -> Self {
        Self { client }
    }

    /// Fetch random tossups
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let tossups = client
    ///     .random()
    ///     .tossups()
    ///     .difficulties([Difficulty::HsRegular])
    ///     .number(5)
    ///     .send()
    ///     .await?;
    /// ```
    #[must_use]
    pub fn tossups(&self) -> RandomTossupBuilder<'a> {
        RandomTossupBuilder {
            filters: RandomFilters::new(self.client),
            powermark_only: false,
        }
    }

    /// Fetch random bonuses
    #[must_use]
    pub fn bonuses(&self) -> RandomBonusBuilder<'a> {
        RandomBonusBuilder {
            filters: RandomFilters::new(self.client),
        }
    }

    /// Fetch a randomly generated name, as used for new multiplayer rooms
    pub async fn name(&self) -> Result<String> {
        let response: RandomNameResponse = self.client.get("/random-name").await?;
        Ok(response.random_name)
    }
}

/// Filters shared by both random question requests
struct RandomFilters<'a> {
    client: &'a QbReaderClient,
    difficulties: Vec<Difficulty>,
    categories: Vec<Category>,
    subcategories: Vec<Category>,
    number: u32,
    min_year: Option<u16>,
    max_year: Option<u16>,
    standard_only: bool,
}

impl<'a> RandomFilters<'a> {
    const fn new(client: &'a QbReaderClient) -> Self {
        Self {
            client,
            difficulties: Vec::new(),
            categories: Vec::new(),
            subcategories: Vec::new(),
            number: 1,
            min_year: None,
            max_year: None,
            standard_only: false,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("number", self.number.to_string())];

        if !self.difficulties.is_empty() {
            let codes: Vec<u8> = self.difficulties.iter().map(|d| d.code()).collect();
            params.push(("difficulties", join(&codes)));
        }
        if !self.categories.is_empty() {
            params.push(("categories", join(&self.categories)));
        }
        if !self.subcategories.is_empty() {
            params.push(("subcategories", join(&self.subcategories)));
        }
        if let Some(year) = self.min_year {
            params.push(("minYear", year.to_string()));
        }
        if let Some(year) = self.max_year {
            params.push(("maxYear", year.to_string()));
        }
        if self.standard_only {
            params.push(("standardOnly", "true".to_string()));
        }

        params
    }
}

macro_rules! random_filter_setters {
    () => {
        /// Only return questions of these difficulties
        #[must_use]
        pub fn difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
            self.filters.difficulties.extend(difficulties);
            self
        }

        /// Only return questions in these categories
        #[must_use]
        pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
            self.filters.categories.extend(categories);
            self
        }

        /// Only return questions in these subcategories
        #[must_use]
        pub fn subcategories(mut self, subcategories: impl IntoIterator<Item = Category>) -> Self {
            self.filters.subcategories.extend(subcategories);
            self
        }

        /// Number of questions to return (defaults to 1)
        #[must_use]
        pub fn number(mut self, number: u32) -> Self {
            self.filters.number = number;
            self
        }

        /// Earliest set year to include
        #[must_use]
        pub fn min_year(mut self, year: u16) -> Self {
            self.filters.min_year = Some(year);
            self
        }

        /// Latest set year to include
        #[must_use]
        pub fn max_year(mut self, year: u16) -> Self {
            self.filters.max_year = Some(year);
            self
        }

        /// Only draw from standard-format sets
        #[must_use]
        pub fn standard_only(mut self, standard: bool) -> Self {
            self.filters.standard_only = standard;
            self
        }
    };
}

/// Builder for random tossup requests
pub struct RandomTossupBuilder<'a> {
    filters: RandomFilters<'a>,
    powermark_only: bool,
}

impl RandomTossupBuilder<'_> {
    random_filter_setters!();

    /// Only return tossups with a power marker
    #[must_use]
    pub fn powermark_only(mut self, powermark: bool) -> Self {
        self.powermark_only = powermark;
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.filters.params();
        if self.powermark_only {
            params.push(("powermarkOnly", "true".to_string()));
        }
        params
    }

    /// Execute the request
    pub async fn send(self) -> Result<Vec<Tossup>> {
        let params = self.params();
        let response: TossupsResponse = self
            .filters
            .client
            .get_with_query("/random-tossup", &params)
            .await?;
        validate(response.tossups)
    }
}

/// Builder for random bonus requests
pub struct RandomBonusBuilder<'a> {
    filters: RandomFilters<'a>,
}

impl RandomBonusBuilder<'_> {
    random_filter_setters!();

    /// Execute the request
    pub async fn send(self) -> Result<Vec<Bonus>> {
        let params = self.filters.params();
        let response: BonusesResponse = self
            .filters
            .client
            .get_with_query("/random-bonus", &params)
            .await?;
        validate(response.bonuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tossup_params() {
        let client = QbReaderClient::new().unwrap();
        let params = client
            .random()
            .tossups()
            .number(5)
            .categories([Category::Mythology])
            .powermark_only(true)
            .params();

        assert!(params.contains(&("number", "5".to_string())));
        assert!(params.contains(&("categories", "Mythology".to_string())));
        assert!(params.contains(&("powermarkOnly", "true".to_string())));
        assert!(!params.iter().any(|(key, _)| *key == "standardOnly"));
    }

    #[test]
    fn test_bonus_defaults_to_one() {
        let client = QbReaderClient::new().unwrap();
        let builder = client.random().bonuses();
        assert_eq!(builder.filters.params(), vec![("number", "1".to_string())]);
    }
}
