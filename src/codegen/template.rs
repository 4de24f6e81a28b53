//! Local scaffold script used whenever the remote generator is unavailable.

const PARAMS_PLACEHOLDER: &str = "{{PARAMETERS}}";

const SCAFFOLD: &str = r#"
import pandas as pd
import numpy as np
from sklearn.model_selection import train_test_split
from sklearn.preprocessing import StandardScaler
from sklearn.ensemble import RandomForestClassifier
from sklearn.metrics import classification_report

# Data Collection
def load_data(params):
    if params.source_type == 'csv':
        return pd.read_csv(params.path)
    # Add other data source types here
    return None

# Data Preprocessing
def preprocess_data(df, params):
    # Handle missing values
    if params.missing_data == 'drop':
        df = df.dropna()
    elif params.missing_data == 'mean':
        df = df.fillna(df.mean())

    # Feature scaling
    if params.feature_scaling == 'standard':
        scaler = StandardScaler()
        df = pd.DataFrame(scaler.fit_transform(df), columns=df.columns)

    return df

# Model Training
def train_model(X_train, y_train, params):
    model = RandomForestClassifier(
        n_estimators=params.n_estimators,
        max_depth=params.max_depth,
        random_state=params.random_state
    )
    model.fit(X_train, y_train)
    return model

# Main Pipeline
def main():
    # Parameters from the workflow
    params = {{PARAMETERS}}

    # Load and preprocess data
    data = load_data(params)
    processed_data = preprocess_data(data, params)

    # Split features and target
    X = processed_data.drop(params.target_column, axis=1)
    y = processed_data[params.target_column]

    # Train-test split
    X_train, X_test, y_train, y_test = train_test_split(
        X, y, test_size=params.test_size, random_state=params.random_state
    )

    # Train model
    model = train_model(X_train, y_train, params)

    # Evaluate model
    predictions = model.predict(X_test)
    print(classification_report(y_test, predictions))

if __name__ == "__main__":
    main()
"#;

/// Renders the scaffold with `parameters` embedded as pretty-printed JSON.
pub fn fallback_script(parameters: &serde_json::Value) -> String {
    let serialized =
        serde_json::to_string_pretty(parameters).unwrap_or_else(|_| parameters.to_string());
    SCAFFOLD.replace(PARAMS_PLACEHOLDER, &serialized)
}
