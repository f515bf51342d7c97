use std::sync::LazyLock;

use super::{Catalog, ContentItem, Language, Section};

static TUTORIALS: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(Section::Tutorials, entries()).expect("tutorial catalog ids are unique")
});

/// The tutorial catalog.
pub fn catalog() -> &'static Catalog {
    &TUTORIALS
}

const MAP_HTML: &str = r#"<div id="map"></div>"#;
const MAP_CSS: &str = "#map { height: 400px; width: 100%; }";

fn map_tutorial(
    id: &str,
    title: &str,
    description: &str,
    content: &str,
    script: &str,
) -> ContentItem {
    ContentItem::new(id, title, description, content)
        .with_sample(Language::Html, MAP_HTML)
        .with_sample(Language::Css, MAP_CSS)
        .with_sample(Language::JavaScript, script)
}

fn entries() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "1",
            "Live HTML/CSS/JS Editor",
            "Edit and preview HTML/CSS/JavaScript in real time.",
            "## Live Code Editor\n\nTest out your code instantly.",
        )
        .with_sample(Language::Html, r#"<h1 id="welcome">Welcome!</h1>"#)
        .with_sample(Language::Css, "h1 { color: green; text-align: center; }")
        .with_sample(
            Language::JavaScript,
            r#"document.getElementById('welcome').textContent += " 🎉";"#,
        ),
        map_tutorial(
            "2",
            "1.Basic Leaflet Map",
            "Create a simple interactive map.",
            "## Leaflet Basics\n\nAdd a map and set the view.",
            r#"var map = L.map('map').setView([51.505, -0.09], 13);
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
  maxZoom: 19,
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);"#,
        ),
        map_tutorial(
            "3",
            "2.Add Markers and Popups",
            "Learn how to add markers, circles, and polygons.",
            "## Markers & Shapes\n\nUse markers and shapes with popup messages.",
            r#"L.marker([51.5, -0.09]).addTo(map).bindPopup("Hello!");
L.circle([51.508, -0.11], { color: 'red', radius: 500 }).addTo(map);"#,
        ),
        map_tutorial(
            "4",
            "3.Handle Map Click Events",
            "Respond to user interactions on the map.",
            "## Events\n\nCapture user clicks to show popups.",
            r#"map.on('click', function(e) {
  L.popup()
    .setLatLng(e.latlng)
    .setContent("You clicked at " + e.latlng.toString())
    .openOn(map);
});"#,
        ),
        map_tutorial(
            "5",
            "4.Use Geolocation",
            "Center the map on the user's location.",
            "## Geolocation\n\nFind and display the user's current location.",
            r#"map.locate({ setView: true, maxZoom: 16 });
map.on('locationfound', (e) => {
  L.marker(e.latlng).addTo(map).bindPopup("You are here").openPopup();
});"#,
        ),
        map_tutorial(
            "6",
            "5.Add Custom Icons",
            "Use your own icons in place of default ones.",
            "## Custom Markers\n\nUse custom images as markers.",
            r#"const myIcon = L.icon({ iconUrl: 'icon.png', iconSize: [32, 32] });
L.marker([51.5, -0.09], { icon: myIcon }).addTo(map);"#,
        ),
        ContentItem::new(
            "7",
            "Python Machine Learning Example",
            "Basic Python ML code using scikit-learn.",
            r#"
## Python ML Example

This tutorial shows how to train a simple Logistic Regression classifier using scikit-learn.

Note: This is static code; Python cannot run directly in this live editor.
"#,
        )
        .with_sample(
            Language::Python,
            r#"from sklearn.datasets import load_iris
from sklearn.linear_model import LogisticRegression
from sklearn.model_selection import train_test_split
from sklearn.metrics import accuracy_score

# Load dataset
iris = load_iris()
X, y = iris.data, iris.target

# Split dataset
X_train, X_test, y_train, y_test = train_test_split(X, y, test_size=0.3, random_state=42)

# Train model
model = LogisticRegression(max_iter=200)
model.fit(X_train, y_train)

# Predict and evaluate
predictions = model.predict(X_test)
print("Accuracy:", accuracy_score(y_test, predictions))"#,
        ),
    ]
}
