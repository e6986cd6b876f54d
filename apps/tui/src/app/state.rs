use crate::api::models::{Country, NewCountry, RankingEntry};
use crate::api::ApiError;
use crate::app::actions::AppActions;
use crate::domain::Metric;
use color_eyre::Result;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Instant;

#[derive(Debug, PartialEq, Eq)]
pub enum AppScreen {
    Main,
    AddCountry,
    Explorer,
    Compare,
    Ranking,
}

/// Which selector column of the compare screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSlot {
    A,
    B,
}

/// Represents which field is currently selected in the AddCountry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Score(Metric),
    Submit,
}

impl FormField {
    /// Traversal order of the form, top to bottom.
    pub const ORDER: [Self; 8] = [
        Self::Name,
        Self::Score(Metric::Geological),
        Self::Score(Metric::Political),
        Self::Score(Metric::Legal),
        Self::Score(Metric::Economic),
        Self::Score(Metric::MarketAccess),
        Self::Score(Metric::Security),
        Self::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Holds the temporary state of a country being entered
#[derive(Debug, Clone)]
pub struct AddCountryState {
    pub field: FormField,
    pub name: String,
    pub scores: [String; 6],
    pub editing: bool, // Whether we're actively editing the current field
    pub error: String,
}

impl AddCountryState {
    pub fn new() -> Self {
        Self {
            field: FormField::Name,
            name: String::new(),
            scores: Default::default(),
            editing: false,
            error: String::new(),
        }
    }

    pub fn score_input(&self, metric: Metric) -> &str {
        &self.scores[metric as usize]
    }

    pub fn score_input_mut(&mut self, metric: Metric) -> &mut String {
        &mut self.scores[metric as usize]
    }

    /// Validates the form and builds the POST payload. Score checks run
    /// before the name check, matching the dashboard form. A validation
    /// failure never reaches the network.
    pub fn validate(&self) -> Result<NewCountry, String> {
        let mut values = [0.0_f64; 6];
        for metric in Metric::ALL {
            match self.score_input(metric).trim().parse::<f64>() {
                Ok(value) if (0.0..=10.0).contains(&value) => {
                    values[metric as usize] = value;
                }
                _ => {
                    return Err(format!(
                        "{} score must be a number between 0 and 10.",
                        metric.label()
                    ));
                }
            }
        }

        if self.name.trim().is_empty() {
            return Err("Country name is required.".to_string());
        }

        Ok(NewCountry {
            name: self.name.trim().to_string(),
            geological_score: values[Metric::Geological as usize],
            political_score: values[Metric::Political as usize],
            legal_score: values[Metric::Legal as usize],
            economic_score: values[Metric::Economic as usize],
            market_access_score: values[Metric::MarketAccess as usize],
            security_score: values[Metric::Security as usize],
        })
    }
}

/// Indices into `countries` matching the fuzzy name filter, best match
/// first. An empty query keeps the cache order.
pub fn filter_country_indices(countries: &[Country], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..countries.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored = countries
        .iter()
        .enumerate()
        .filter_map(|(index, country)| {
            matcher
                .fuzzy_match(&country.name, query)
                .map(|score| (index, score))
        })
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(index, _)| index).collect()
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub status_message: String,
    pub show_help: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub actions: AppActions,
    /// Read-through cache of the backend country list. Replaced
    /// wholesale on every refresh, never merged.
    pub countries: Vec<Country>,
    pub add_state: AddCountryState,
    pub menu_index: usize,
    pub explorer_index: usize,
    pub explorer_filter: String,
    pub explorer_searching: bool,
    pub compare_slot: CompareSlot,
    pub compare_a_index: usize,
    pub compare_b_index: usize,
    pub compared: Option<(i64, i64)>,
    pub compare_message: String,
    pub ranking: Vec<RankingEntry>,
    pub ranking_index: usize,
    pub ranking_fetched_at: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Main,
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            actions: AppActions::new(),
            countries: Vec::new(),
            add_state: AddCountryState::new(),
            menu_index: 0,
            explorer_index: 0,
            explorer_filter: String::new(),
            explorer_searching: false,
            compare_slot: CompareSlot::A,
            compare_a_index: 0,
            compare_b_index: 0,
            compared: None,
            compare_message: String::new(),
            ranking: Vec::new(),
            ranking_index: 0,
            ranking_fetched_at: None,
        }
    }

    /// Reads configuration, builds the HTTP client, and loads the cache.
    pub async fn initialize(&mut self) -> Result<()> {
        self.actions.initialize();
        self.refresh_countries().await?;
        Ok(())
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    /// Replaces the country cache with the backend list.
    pub async fn refresh_countries(&mut self) -> Result<(), ApiError> {
        let countries = self.actions.fetch_countries().await?;
        self.countries = countries;
        self.clamp_selections();
        Ok(())
    }

    fn clamp_selections(&mut self) {
        let last = self.countries.len().saturating_sub(1);
        self.explorer_index = self.explorer_index.min(last);
        self.compare_a_index = self.compare_a_index.min(last);
        self.compare_b_index = self.compare_b_index.min(last);
    }

    /// Validates the form and posts it. Returns true when the country
    /// was added and the cache refreshed.
    pub async fn submit_new_country(&mut self) -> bool {
        self.add_state.error.clear();

        let payload = match self.add_state.validate() {
            Ok(payload) => payload,
            Err(message) => {
                self.add_state.error = message;
                return false;
            }
        };

        match self.actions.create_country(&payload).await {
            Ok(()) => {}
            Err(ApiError::Status(_)) => {
                self.add_state.error =
                    "Unable to add country. Name may already exist.".to_string();
                return false;
            }
            Err(e) => {
                self.add_state.error = format!("Unable to add country: {e}");
                return false;
            }
        }

        let name = payload.name;
        self.add_state = AddCountryState::new();
        match self.refresh_countries().await {
            Ok(()) => self.status_message = format!("Added {name}"),
            Err(e) => {
                self.status_message = format!("Added {name}, but refreshing the list failed: {e}");
            }
        }

        true
    }

    /// Fetches the server-computed ranking.
    pub async fn fetch_ranking(&mut self) -> Result<(), ApiError> {
        let ranking = self.actions.fetch_ranking().await?;
        self.ranking = ranking;
        self.ranking_index = 0;
        self.ranking_fetched_at = Some(chrono::Local::now().format("%H:%M:%S").to_string());
        Ok(())
    }

    /// Records the compared pair, guarding the way the dashboard does:
    /// fewer than two countries clears any previous comparison, a
    /// same-country selection leaves it in place.
    pub fn run_comparison(&mut self) {
        self.compare_message.clear();

        if self.countries.len() < 2 {
            self.compare_message = "Add at least two countries to compare.".to_string();
            self.compared = None;
            return;
        }

        let (Some(a), Some(b)) = (
            self.countries.get(self.compare_a_index),
            self.countries.get(self.compare_b_index),
        ) else {
            self.compare_message = "Select two different countries for comparison.".to_string();
            return;
        };

        if a.id == b.id {
            self.compare_message = "Select two different countries for comparison.".to_string();
            return;
        }

        self.compared = Some((a.id, b.id));
    }

    /// Resolves the compared pair against the current cache.
    pub fn compared_countries(&self) -> Option<(&Country, &Country)> {
        let (id_a, id_b) = self.compared?;
        let a = self.countries.iter().find(|country| country.id == id_a)?;
        let b = self.countries.iter().find(|country| country.id == id_b)?;
        Some((a, b))
    }

    /// Back to the main menu, dropping transient view state.
    pub fn reset(&mut self) {
        self.screen = AppScreen::Main;
        self.status_message.clear();
        self.add_state = AddCountryState::new();
        self.explorer_filter.clear();
        self.explorer_searching = false;
        self.compare_message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_country_indices, AddCountryState, App, FormField};
    use crate::api::models::Country;
    use crate::domain::Metric;

    fn country(id: i64, name: &str, scores: [f64; 6]) -> Country {
        Country {
            id,
            name: name.to_string(),
            geological_score: scores[0],
            political_score: scores[1],
            legal_score: scores[2],
            economic_score: scores[3],
            market_access_score: scores[4],
            security_score: scores[5],
        }
    }

    fn filled_form() -> AddCountryState {
        let mut state = AddCountryState::new();
        state.name = "Chile".to_string();
        for metric in Metric::ALL {
            *state.score_input_mut(metric) = "5".to_string();
        }
        state
    }

    #[test]
    fn valid_form_builds_payload() {
        let mut state = filled_form();
        *state.score_input_mut(Metric::Geological) = "8.5".to_string();

        let payload = state.validate().expect("form should validate");
        assert_eq!(payload.name, "Chile");
        assert!((payload.geological_score - 8.5).abs() < f64::EPSILON);
        assert!((payload.security_score - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let mut state = filled_form();
        *state.score_input_mut(Metric::Political) = "10.5".to_string();

        assert_eq!(
            state.validate().unwrap_err(),
            "Political score must be a number between 0 and 10."
        );

        *state.score_input_mut(Metric::Political) = "-1".to_string();
        assert!(state.validate().is_err());
    }

    #[test]
    fn non_numeric_score_is_rejected() {
        let mut state = filled_form();
        *state.score_input_mut(Metric::MarketAccess) = "high".to_string();

        assert_eq!(
            state.validate().unwrap_err(),
            "Market Access score must be a number between 0 and 10."
        );
    }

    #[test]
    fn empty_score_is_rejected() {
        let mut state = filled_form();
        state.score_input_mut(Metric::Security).clear();

        assert!(state.validate().is_err());
    }

    #[test]
    fn blank_name_is_rejected_after_scores() {
        let mut state = filled_form();
        state.name = "   ".to_string();

        assert_eq!(state.validate().unwrap_err(), "Country name is required.");

        // A score error wins over a missing name, like the dashboard form.
        *state.score_input_mut(Metric::Geological) = "11".to_string();
        assert_eq!(
            state.validate().unwrap_err(),
            "Geological score must be a number between 0 and 10."
        );
    }

    #[test]
    fn boundary_scores_are_accepted() {
        let mut state = filled_form();
        *state.score_input_mut(Metric::Geological) = "0".to_string();
        *state.score_input_mut(Metric::Security) = "10".to_string();

        assert!(state.validate().is_ok());
    }

    #[test]
    fn form_field_order_wraps_both_ways() {
        assert_eq!(FormField::Name.next(), FormField::Score(Metric::Geological));
        assert_eq!(FormField::Submit.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Submit);
        assert_eq!(
            FormField::Score(Metric::Security).next(),
            FormField::Submit
        );
    }

    #[test]
    fn comparison_needs_two_countries() {
        let mut app = App::new();
        app.countries = vec![country(1, "Chile", [5.0; 6])];

        app.run_comparison();
        assert_eq!(app.compare_message, "Add at least two countries to compare.");
        assert_eq!(app.compared, None);
    }

    #[test]
    fn comparison_rejects_same_country() {
        let mut app = App::new();
        app.countries = vec![
            country(1, "Chile", [5.0; 6]),
            country(2, "Ghana", [6.0; 6]),
        ];
        app.compare_a_index = 1;
        app.compare_b_index = 1;

        app.run_comparison();
        assert_eq!(
            app.compare_message,
            "Select two different countries for comparison."
        );
        assert_eq!(app.compared, None);
    }

    #[test]
    fn comparison_records_pair_by_id() {
        let mut app = App::new();
        app.countries = vec![
            country(7, "Chile", [5.0; 6]),
            country(9, "Ghana", [6.0; 6]),
        ];
        app.compare_a_index = 0;
        app.compare_b_index = 1;

        app.run_comparison();
        assert_eq!(app.compared, Some((7, 9)));
        assert!(app.compare_message.is_empty());

        let (a, b) = app.compared_countries().expect("pair should resolve");
        assert_eq!(a.name, "Chile");
        assert_eq!(b.name, "Ghana");
    }

    #[test]
    fn empty_filter_keeps_cache_order() {
        let countries = vec![
            country(1, "Chile", [5.0; 6]),
            country(2, "Ghana", [6.0; 6]),
        ];

        assert_eq!(filter_country_indices(&countries, ""), vec![0, 1]);
        assert_eq!(filter_country_indices(&countries, "   "), vec![0, 1]);
    }

    #[test]
    fn filter_narrows_and_misses() {
        let countries = vec![
            country(1, "Chile", [5.0; 6]),
            country(2, "Ghana", [6.0; 6]),
            country(3, "China", [4.0; 6]),
        ];

        let hits = filter_country_indices(&countries, "chi");
        assert!(hits.contains(&0));
        assert!(hits.contains(&2));
        assert!(!hits.contains(&1));

        assert!(filter_country_indices(&countries, "zzz").is_empty());
    }
}
