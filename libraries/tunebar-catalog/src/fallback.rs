//! Sample tracks served when the catalog cannot be reached

use tunebar_core::Track;

const SAMPLES: [(&str, &str, &str, &str); 6] = [
    (
        "jfKfPfyJRdk",
        "lofi hip hop radio 📚 - beats to relax/study to",
        "Lofi Girl",
        "LIVE",
    ),
    (
        "dQw4w9WgXcQ",
        "Rick Astley - Never Gonna Give You Up",
        "Rick Astley",
        "3:33",
    ),
    ("9bZkp7q19f0", "PSY - GANGNAM STYLE", "officialpsy", "4:13"),
    (
        "kJQP7kiw5Fk",
        "Luis Fonsi - Despacito ft. Daddy Yankee",
        "Luis Fonsi",
        "4:42",
    ),
    (
        "OPf0YbXqDm0",
        "Mark Ronson - Uptown Funk ft. Bruno Mars",
        "Mark Ronson",
        "4:30",
    ),
    ("fRh_vgS2dFE", "Justin Bieber - Sorry", "Justin Bieber", "3:20"),
];

/// The fixed sample list, independent of the query
pub fn sample_tracks() -> Vec<Track> {
    SAMPLES
        .iter()
        .map(|(id, title, artist, duration)| {
            Track::new(*id, *title, *artist)
                .with_thumbnail(format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"))
                .with_duration(*duration)
        })
        .collect()
}
