use std::sync::LazyLock;

use super::{Catalog, ContentItem, Section};

static BLOGS: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(Section::Blogs, entries()).expect("blog catalog ids are unique")
});

/// The blog catalog.
pub fn catalog() -> &'static Catalog {
    &BLOGS
}

fn entries() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "1",
            "Deep Learning in Agriculture",
            "Explore how deep learning is transforming the agriculture industry.",
            r#"
## AI Meets Agriculture

Deep learning is revolutionizing agriculture by introducing intelligent solutions for crop monitoring, yield prediction, and pest detection.

## Crop Monitoring

- Satellite and drone imagery analyzed using CNNs
- Detect plant health issues early
- Enable precision farming practices

## Yield Prediction

- Analyze historical weather, soil, and crop data
- LSTM models forecast future yields accurately
- Helps optimize resource allocation

## Pest & Disease Detection

- Train models on leaf images to spot infestations
- Classify crop diseases with high accuracy
- Reduces reliance on manual inspections

## Future Outlook

Deep learning enables scalable, data-driven decisions in agriculture. As sensor data and computing power grow, AI will become a core tool in feeding a growing global population.
"#,
        ),
        ContentItem::new(
            "2",
            "Urbanization and Global Warming",
            "Understand how rapid urban growth contributes directly to climate change.",
            r#"
## The Urbanization Boom

As more people migrate to cities, urban areas are expanding rapidly, but at what environmental cost?

## Heat Islands

- Dense cities trap heat due to concrete and asphalt
- Temperatures in urban areas can be 3–7°F higher than rural zones
- Increased energy demand for cooling worsens emissions

## Transportation & Emissions

- Urban sprawl increases vehicle use
- More fossil fuels burned = more CO₂ released
- Traffic congestion further amplifies air pollution

## Deforestation & Land Use

- Forests cleared to make way for housing and infrastructure
- Loss of carbon sinks accelerates atmospheric CO₂ buildup
- Natural ecosystems are disrupted

## Resource Consumption

- Cities consume over 75% of global energy
- Heavy reliance on fossil fuels for electricity and industry
- Urban waste and water use strain local environments

## Moving Forward

Smart urban planning, green infrastructure, and renewable energy adoption are key to mitigating the climate impact of growing cities. Urbanization doesn't have to mean warming, but without change, it's a dangerous trend.
"#,
        ),
        ContentItem::new(
            "3",
            "TypeScript for Beginners",
            "How to add type safety to your JavaScript projects using TypeScript.",
            r#"
## Why TypeScript?

TypeScript helps catch errors early and improves developer productivity.

## Topics Covered

- Installing TypeScript
- Basic types and interfaces
- Using TypeScript with React
"#,
        ),
    ]
}
