//! Database search endpoint.

use super::{join, validate};
use crate::QbReaderClient;
use qbreader_core::{
    BonusRecord, Category, Difficulty, QueryResults, QuestionType, Result, SearchType,
    TossupRecord,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    tossups: QuestionPage<TossupRecord>,
    #[serde(default)]
    bonuses: QuestionPage<BonusRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct QuestionPage<T> {
    #[serde(default)]
    count: u64,
    #[serde(default, rename = "questionArray")]
    question_array: Vec<T>,
}

impl<T> Default for QuestionPage<T> {
    fn default() -> Self {
        Self {
            count: 0,
            question_array: Vec::new(),
        }
    }
}

/// Builder for search requests
pub struct QueryRequestBuilder<'a> {
    client: &'a QbReaderClient,
    query: String,
    question_type: QuestionType,
    search_type: SearchType,
    exact_phrase: bool,
    ignore_diacritics: bool,
    ignore_word_order: bool,
    regex: bool,
    randomize: bool,
    set_name: Option<String>,
    difficulties: Vec<Difficulty>,
    categories: Vec<Category>,
    subcategories: Vec<Category>,
    max_return_length: Option<u32>,
    tossup_page: u32,
    bonus_page: u32,
    min_year: Option<u16>,
    max_year: Option<u16>,
}

impl<'a> QueryRequestBuilder<'a> {
    pub(crate) fn new(client: &'a QbReaderClient, query: String) -> Self {
        Self {
            client,
            query,
            question_type: QuestionType::default(),
            search_type: SearchType::default(),
            exact_phrase: false,
            ignore_diacritics: false,
            ignore_word_order: false,
            regex: false,
            randomize: false,
            set_name: None,
            difficulties: Vec::new(),
            categories: Vec::new(),
            subcategories: Vec::new(),
            max_return_length: None,
            tossup_page: 1,
            bonus_page: 1,
            min_year: None,
            max_year: None,
        }
    }

    /// Restrict results to tossups or bonuses
    #[must_use]
    pub fn question_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = question_type;
        self
    }

    /// Match against question text, answer text, or both
    #[must_use]
    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Match the query as a contiguous phrase
    #[must_use]
    pub fn exact_phrase(mut self, exact: bool) -> Self {
        self.exact_phrase = exact;
        self
    }

    /// Treat accented and unaccented letters as equal
    #[must_use]
    pub fn ignore_diacritics(mut self, ignore: bool) -> Self {
        self.ignore_diacritics = ignore;
        self
    }

    /// Match query words in any order
    #[must_use]
    pub fn ignore_word_order(mut self, ignore: bool) -> Self {
        self.ignore_word_order = ignore;
        self
    }

    /// Interpret the query as a regular expression
    #[must_use]
    pub fn regex(mut self, regex: bool) -> Self {
        self.regex = regex;
        self
    }

    /// Shuffle matching questions
    #[must_use]
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Only search within one set
    #[must_use]
    pub fn set_name(mut self, set_name: impl Into<String>) -> Self {
        self.set_name = Some(set_name.into());
        self
    }

    /// Only return questions of these difficulties
    #[must_use]
    pub fn difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        self.difficulties.extend(difficulties);
        self
    }

    /// Only return questions in these categories
    #[must_use]
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Only return questions in these subcategories
    #[must_use]
    pub fn subcategories(mut self, subcategories: impl IntoIterator<Item = Category>) -> Self {
        self.subcategories.extend(subcategories);
        self
    }

    /// Maximum number of questions of each type per page
    #[must_use]
    pub fn max_return_length(mut self, max: u32) -> Self {
        self.max_return_length = Some(max);
        self
    }

    /// Tossup page number (1-indexed)
    #[must_use]
    pub fn tossup_page(mut self, page: u32) -> Self {
        self.tossup_page = page;
        self
    }

    /// Bonus page number (1-indexed)
    #[must_use]
    pub fn bonus_page(mut self, page: u32) -> Self {
        self.bonus_page = page;
        self
    }

    /// Earliest set year to include
    #[must_use]
    pub fn min_year(mut self, year: u16) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Latest set year to include
    #[must_use]
    pub fn max_year(mut self, year: u16) -> Self {
        self.max_year = Some(year);
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("queryString", self.query.clone()),
            ("questionType", self.question_type.to_string()),
            ("searchType", self.search_type.to_string()),
        ];

        let flags = [
            ("exactPhrase", self.exact_phrase),
            ("ignoreDiacritics", self.ignore_diacritics),
            ("ignoreWordOrder", self.ignore_word_order),
            ("regex", self.regex),
            ("randomize", self.randomize),
        ];
        params.extend(
            flags
                .into_iter()
                .filter(|(_, set)| *set)
                .map(|(name, _)| (name, "true".to_string())),
        );

        if let Some(ref set_name) = self.set_name {
            params.push(("setName", set_name.clone()));
        }
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
        if let Some(max) = self.max_return_length {
            params.push(("maxReturnLength", max.to_string()));
        }
        if self.tossup_page > 1 {
            params.push(("tossupPagination", self.tossup_page.to_string()));
        }
        if self.bonus_page > 1 {
            params.push(("bonusPagination", self.bonus_page.to_string()));
        }
        if let Some(year) = self.min_year {
            params.push(("minYear", year.to_string()));
        }
        if let Some(year) = self.max_year {
            params.push(("maxYear", year.to_string()));
        }

        params
    }

    /// Execute the search
    pub async fn send(self) -> Result<QueryResults> {
        let params = self.params();
        let response: QueryResponse = self.client.get_with_query("/query", &params).await?;

        Ok(QueryResults {
            tossups: validate(response.tossups.question_array)?,
            tossup_count: response.tossups.count,
            bonuses: validate(response.bonuses.question_array)?,
            bonus_count: response.bonuses.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'p>(params: &'p [(&str, String)], name: &str) -> Option<&'p str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_response_pages_decode() {
        let response: QueryResponse = serde_json::from_str(
            r#"{
                "tossups": {
                    "count": 2,
                    "questionArray": [{
                        "question": "q",
                        "answer": "a",
                        "formatted_answer": "fa",
                        "category": "Science",
                        "subcategory": "Physics",
                        "packet_number": 1,
                        "question_number": 1,
                        "difficulty": 3,
                        "set_name": "Set"
                    }]
                },
                "bonuses": { "count": 5 }
            }"#,
        )
        .unwrap();

        assert_eq!(response.tossups.count, 2);
        assert_eq!(response.tossups.question_array.len(), 1);
        assert_eq!(response.bonuses.count, 5);
        assert!(response.bonuses.question_array.is_empty());
    }

    #[test]
    fn test_response_missing_pages() {
        let response: QueryResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.tossups.count, 0);
        assert!(response.bonuses.question_array.is_empty());
    }

    #[test]
    fn test_default_params() {
        let client = QbReaderClient::new().unwrap();
        let params = client.query("newton").params();

        assert_eq!(param(&params, "queryString"), Some("newton"));
        assert_eq!(param(&params, "questionType"), Some("all"));
        assert_eq!(param(&params, "searchType"), Some("all"));
        assert_eq!(param(&params, "regex"), None);
        assert_eq!(param(&params, "tossupPagination"), None);
    }

    #[test]
    fn test_filter_params() {
        let client = QbReaderClient::new().unwrap();
        let params = client
            .query("newton")
            .question_type(QuestionType::Bonus)
            .search_type(SearchType::Answer)
            .exact_phrase(true)
            .difficulties([Difficulty::HsRegular, Difficulty::CollegeEasy])
            .categories([Category::Science, Category::FineArts])
            .tossup_page(3)
            .min_year(2015)
            .params();

        assert_eq!(param(&params, "questionType"), Some("bonus"));
        assert_eq!(param(&params, "searchType"), Some("answer"));
        assert_eq!(param(&params, "exactPhrase"), Some("true"));
        assert_eq!(param(&params, "difficulties"), Some("3,6"));
        assert_eq!(param(&params, "categories"), Some("Science,Fine Arts"));
        assert_eq!(param(&params, "tossupPagination"), Some("3"));
        assert_eq!(param(&params, "minYear"), Some("2015"));
        assert_eq!(param(&params, "bonusPagination"), None);
    }
}
