// crates/worldmap-core/src/popup.rs
//! Popup markup for landmark markers and country polygons.
use crate::model::{CountryStat, Landmark};
use crate::text::{escape_html, format_number};

/// Landmark popup: photo, linked title, description.
///
/// A broken photo URL is swapped for `placeholder_image` by the browser
/// itself through the `onerror` handler.
pub fn landmark_popup(landmark: &Landmark, placeholder_image: &str) -> String {
    let name = escape_html(&landmark.name);
    format!(
        concat!(
            r#"<div class="popup-content">"#,
            r#"<img src="{img}" alt="{name} photo" onerror="this.onerror=null; this.src='{placeholder}';">"#,
            r#"<h3><a href="{link}" target="_blank">{name}</a></h3>"#,
            r#"<p>{description}</p>"#,
            r#"</div>"#
        ),
        img = escape_html(&landmark.image_url),
        name = name,
        placeholder = escape_html(placeholder_image),
        link = escape_html(&landmark.wikipedia_url),
        description = escape_html(&landmark.description),
    )
}

/// Country popup with statistics, or the "not available" fallback when the
/// country has no entry in the statistics table.
pub fn country_popup(name: &str, stat: Option<&CountryStat>) -> String {
    match stat {
        Some(stat) => country_stats_popup(name, stat),
        None => country_fallback_popup(name),
    }
}

pub fn country_stats_popup(name: &str, stat: &CountryStat) -> String {
    format!(
        concat!(
            r#"<div class="popup-content">"#,
            "<h3>{name}</h3>",
            "<p><strong>Population:</strong> {population}</p>",
            "<p><strong>GDP:</strong> ${gdp}</p>",
            "<p><strong>GDP per Capita:</strong> ${per_capita}</p>",
            "<p><strong>Year:</strong> {year}</p>",
            "</div>"
        ),
        name = escape_html(name),
        population = format_number(stat.population),
        gdp = format_number(stat.gdp),
        per_capita = format_number(stat.gdp_per_capita),
        year = stat.year,
    )
}

pub fn country_fallback_popup(name: &str) -> String {
    format!("<h3>{}</h3><p>Data not available.</p>", escape_html(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_popup_formats_every_figure() {
        let stat = CountryStat {
            population: 1_000_000_000.0,
            gdp: 2_782_905_000_000.0,
            gdp_per_capita: 40_886.25,
            year: 2022,
        };
        let html = country_popup("France", Some(&stat));
        assert!(html.starts_with(r#"<div class="popup-content"><h3>France</h3>"#));
        assert!(html.contains("<strong>Population:</strong> 1,000,000,000</p>"));
        assert!(html.contains("<strong>GDP:</strong> $2,782,905,000,000</p>"));
        assert!(html.contains("<strong>GDP per Capita:</strong> $40,886.25</p>"));
        assert!(html.contains("<strong>Year:</strong> 2022</p>"));
    }

    #[test]
    fn fallback_popup_is_exact() {
        assert_eq!(
            country_popup("Luxembourg", None),
            "<h3>Luxembourg</h3><p>Data not available.</p>"
        );
    }

    #[test]
    fn landmark_popup_links_and_falls_back() {
        let landmark = Landmark {
            name: "Eiffel Tower".into(),
            lat: 48.8584,
            lng: 2.2945,
            image_url: "https://img.example/eiffel.jpg".into(),
            wikipedia_url: "https://en.wikipedia.org/wiki/Eiffel_Tower".into(),
            description: "Wrought-iron lattice tower & icon of Paris.".into(),
        };
        let html = landmark_popup(&landmark, "https://placehold.example/none.png");
        assert!(html.contains(
            r#"<a href="https://en.wikipedia.org/wiki/Eiffel_Tower" target="_blank">Eiffel Tower</a>"#
        ));
        assert!(html.contains("<p>Wrought-iron lattice tower &amp; icon of Paris.</p>"));
        assert!(html.contains("this.src='https://placehold.example/none.png'"));
    }
}
