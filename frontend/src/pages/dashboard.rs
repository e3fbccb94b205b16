//! Protected landing area: the diabetes prediction form.
//!
//! Stateless request/response against the prediction endpoint; carries no
//! session semantics of its own. The route guard has already run by the
//! time this renders.

use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::api::{PredictionRequest, PredictionResponse};

use crate::components::error_alert::ErrorAlert;
use crate::components::spinner::Spinner;
use crate::services::api::ApiService;

/// Form fields in display order: (wire name, label).
const FIELDS: &[(&str, &str)] = &[
    ("gender", "Gender"),
    ("age", "Age"),
    ("hypertension", "Hypertension"),
    ("heart_disease", "Heart disease"),
    ("bmi", "BMI"),
    ("HbA1c_level", "HbA1c level"),
    ("blood_glucose_level", "Blood glucose level"),
    ("smoking_history_numeric", "Smoking history"),
];

fn build_request(values: &HashMap<&'static str, String>) -> Option<PredictionRequest> {
    let field = |name: &str| values.get(name)?.trim().parse::<f64>().ok();
    Some(PredictionRequest {
        gender: field("gender")?,
        age: field("age")?,
        hypertension: field("hypertension")?,
        heart_disease: field("heart_disease")?,
        bmi: field("bmi")?,
        hba1c_level: field("HbA1c_level")?,
        blood_glucose_level: field("blood_glucose_level")?,
        smoking_history_numeric: field("smoking_history_numeric")?,
    })
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let values = use_state(HashMap::<&'static str, String>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let result = use_state(|| None::<PredictionResponse>);

    let onclick = {
        let values = values.clone();
        let loading = loading.clone();
        let error = error.clone();
        let result = result.clone();

        Callback::from(move |_: MouseEvent| {
            if *loading {
                return;
            }
            error.set(None);
            result.set(None);

            let missing = FIELDS.iter().any(|(name, _)| {
                values
                    .get(name)
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
            });
            if missing {
                error.set(Some("All fields are required.".to_string()));
                return;
            }
            let Some(request) = build_request(&values) else {
                error.set(Some("All fields must be numeric.".to_string()));
                return;
            };

            loading.set(true);
            let loading = loading.clone();
            let error = error.clone();
            let result = result.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::predict(&request).await {
                    Ok(response) => {
                        result.set(Some(response));
                        loading.set(false);
                    }
                    Err(err) => {
                        tracing::error!("prediction failed: {err:?}");
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="container">
            <h2>{ "Diabetes Prediction" }</h2>

            <div class="form-grid">
                { for FIELDS.iter().map(|(name, label)| {
                    let values = values.clone();
                    let error = error.clone();
                    let name: &'static str = *name;
                    let oninput = Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let mut next = (*values).clone();
                        next.insert(name, input.value());
                        values.set(next);
                        error.set(None);
                    });

                    html! {
                        <div class="form-field">
                            <label>{ *label }</label>
                            <input type="number" placeholder="0" {oninput} />
                        </div>
                    }
                })}
            </div>

            if let Some(message) = (*error).clone() {
                <ErrorAlert {message} />
            }

            <button class="btn btn-primary" {onclick} disabled={*loading}>
                if *loading {
                    { "Predicting..." }
                } else {
                    { "Predict" }
                }
            </button>

            if *loading {
                <Spinner />
            }

            if let Some(response) = &*result {
                <div class="prediction-result">
                    <h3>{ &response.diagnosis }</h3>
                    <p>{ format!("Prediction: {}", response.prediction) }</p>
                    if !response.ai_resources.is_empty() {
                        <ul class="resource-list">
                            { for response.ai_resources.iter().map(|resource| html! {
                                <li>
                                    <a href={resource.url.clone()} target="_blank">
                                        { &resource.title }
                                    </a>
                                </li>
                            })}
                        </ul>
                    }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> HashMap<&'static str, String> {
        FIELDS
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (*name, format!("{i}.5")))
            .collect()
    }

    #[test]
    fn test_build_request_with_all_fields() {
        let request = build_request(&filled()).expect("all fields present");
        assert_eq!(request.gender, 0.5);
        assert_eq!(request.hba1c_level, 5.5);
    }

    #[test]
    fn test_build_request_missing_field() {
        let mut values = filled();
        values.remove("bmi");
        assert!(build_request(&values).is_none());
    }

    #[test]
    fn test_build_request_non_numeric_field() {
        let mut values = filled();
        values.insert("age", "forty".to_string());
        assert!(build_request(&values).is_none());
    }
}
