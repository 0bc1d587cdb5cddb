use wheelhouse_types::stats::{
    format_amount, title_case, GameSummary, StatsDocument, DEFAULT_BET_AMOUNT,
};

use crate::playlist::SongEntry;

/// Quick messages the operator can copy into chat.
const SAVED_MESSAGES: &[(&str, &str)] = &[
    (
        "Hot Wheel",
        "The wheel is hot! It's got to be ready any spin now!",
    ),
    ("Loss Streak Alert", "This is a placeholder."),
    ("Chance", "Anyone care to take a chance on the wheel?"),
];

/// Entries of the profit history shown inline on a panel.
const HISTORY_DISPLAY_LIMIT: usize = 12;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn bet_selector(field_id: &str) -> String {
    let options = (1..=10)
        .map(|i| {
            let amount = i64::from(i) * DEFAULT_BET_AMOUNT;
            let selected = if amount == DEFAULT_BET_AMOUNT {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{amount}"{selected}>{}</option>"#,
                format_amount(amount)
            )
        })
        .collect::<String>();
    format!(r#"<select id="{field_id}" name="bet_amount_hidden">{options}</select>"#)
}

fn stat_tile(label: &str, value: &str) -> String {
    format!(
        r#"<div class="tile"><div class="label">{label}</div><div class="value">{value}</div></div>"#
    )
}

fn win_loss_display(summary: &GameSummary, placeholder: &str) -> String {
    if summary.spins > 0 {
        format!("{} Wins / {} Losses", summary.wins, summary.losses)
    } else {
        placeholder.to_string()
    }
}

fn history_row(history: &[i64]) -> String {
    let recent = history
        .iter()
        .rev()
        .take(HISTORY_DISPLAY_LIMIT)
        .rev()
        .map(|value| format!(r#"<span class="point">{}</span>"#, format_amount(*value)))
        .collect::<Vec<_>>()
        .join(" ");
    format!(r#"<div class="history">{recent}</div>"#)
}

fn leaderboard_table(doc: &StatsDocument) -> String {
    let ranked = doc.ranked_leaderboard();
    if ranked.is_empty() {
        return r#"<p class="muted">No winners recorded yet.</p>"#.to_string();
    }
    let rows = ranked
        .iter()
        .map(|(name, winnings)| {
            format!(
                "<tr><td>{}</td><td class=\"num\">{}</td></tr>",
                escape_html(&title_case(name)),
                format_amount(*winnings)
            )
        })
        .collect::<String>();
    format!(
        r#"<table><thead><tr><th>Player</th><th class="num">Winnings</th></tr></thead><tbody>{rows}</tbody></table>"#
    )
}

fn playlist_table(songs: &[SongEntry]) -> String {
    if songs.is_empty() {
        return r#"<p class="muted">No song IDs loaded.</p>"#.to_string();
    }
    let rows = songs
        .iter()
        .map(|song| {
            format!(
                "<tr><td class=\"num\">{}</td><td>{}</td></tr>",
                escape_html(&song.id),
                escape_html(&song.name)
            )
        })
        .collect::<String>();
    format!(
        r#"<table><thead><tr><th class="num">ID</th><th>Song</th></tr></thead><tbody>{rows}</tbody></table>"#
    )
}

fn messages_block() -> String {
    let items = SAVED_MESSAGES
        .iter()
        .map(|(label, text)| format!("<dt>{label}</dt><dd>{text}</dd>"))
        .collect::<String>();
    format!(r#"<div class="panel"><h2>Saved Messages</h2><dl>{items}</dl></div>"#)
}

fn wheel_panel(doc: &StatsDocument) -> String {
    let summary = doc.wheel_summary();
    let tiles = [
        stat_tile("Net Profit", &format_amount(doc.net_profit)),
        stat_tile("Loss Streak", &doc.loss_streak.to_string()),
        stat_tile("Total Spins", &summary.spins.to_string()),
        stat_tile("Record", &win_loss_display(&summary, "Start Spinning!")),
    ]
    .join("");

    format!(
        r#"<div class="panel">
  <h2>Spinning Wheel</h2>
  <div class="tiles">{tiles}</div>
  <div class="ratio">Win {win}% / Loss {loss}%</div>
  {history}
  <div class="actions">
    <form method="post" action="/win">
      {bet}
      <input type="text" name="winner_name" placeholder="Winner name (optional)" />
      <button class="btn good">Player Wins</button>
    </form>
    <form method="post" action="/lose">
      {bet_lose}
      <button class="btn bad">Player Loses</button>
    </form>
  </div>
  <h3>Leaderboard</h3>
  {leaderboard}
</div>"#,
        win = summary.win_percent,
        loss = summary.loss_percent,
        history = history_row(&doc.profit_history),
        bet = bet_selector("wheel-win-bet"),
        bet_lose = bet_selector("wheel-lose-bet"),
        leaderboard = leaderboard_table(doc),
    )
}

fn odds_evens_panel(doc: &StatsDocument) -> String {
    let summary = doc.odds_evens_summary();
    let tiles = [
        stat_tile("Net Profit", &format_amount(doc.oe_net_profit)),
        stat_tile("Total Bets", &summary.spins.to_string()),
        stat_tile("Record", &win_loss_display(&summary, "Start Betting!")),
    ]
    .join("");

    format!(
        r#"<div class="panel">
  <h2>Odds or Evens</h2>
  <div class="tiles">{tiles}</div>
  <div class="ratio">Win {win}% / Loss {loss}%</div>
  {history}
  <div class="actions">
    <form method="post" action="/odd_even_wins">
      {bet}
      <button class="btn good">Player Wins</button>
    </form>
    <form method="post" action="/odd_even_loses">
      {bet_lose}
      <button class="btn bad">Player Loses</button>
    </form>
  </div>
</div>"#,
        win = summary.win_percent,
        loss = summary.loss_percent,
        history = history_row(&doc.oe_profit_history),
        bet = bet_selector("oe-win-bet"),
        bet_lose = bet_selector("oe-lose-bet"),
    )
}

/// Renders the whole dashboard. Kept as a single server-rendered page with no
/// build step; the active tab comes from the query string so redirects can
/// land the operator back where they were.
pub fn render(doc: &StatsDocument, active_tab: &str, songs: &[SongEntry]) -> String {
    let odds_active = active_tab == "odds";
    let (wheel_class, odds_class) = if odds_active {
        ("tab", "tab active")
    } else {
        ("tab active", "tab")
    };
    let panel = if odds_active {
        odds_evens_panel(doc)
    } else {
        wheel_panel(doc)
    };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Wheelhouse</title>
    <style>
      :root {{
        --bg: #0b1220;
        --panel: rgba(255,255,255,0.06);
        --stroke: rgba(255,255,255,0.12);
        --text: rgba(255,255,255,0.92);
        --muted: rgba(255,255,255,0.65);
        --good: #33d17a;
        --bad: #ff4d4d;
      }}
      * {{ box-sizing: border-box; }}
      body {{
        margin: 0;
        font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial;
        color: var(--text);
        background: var(--bg);
      }}
      .wrap {{ max-width: 960px; margin: 0 auto; padding: 22px 18px 42px; }}
      .tabs {{ display: flex; gap: 8px; margin: 16px 0; }}
      .tab {{
        padding: 8px 16px; border: 1px solid var(--stroke); border-radius: 10px;
        color: var(--muted); text-decoration: none;
      }}
      .tab.active {{ color: var(--text); background: var(--panel); }}
      .panel {{
        border: 1px solid var(--stroke); border-radius: 16px; background: var(--panel);
        padding: 16px; margin-bottom: 18px;
      }}
      .tiles {{ display: flex; flex-wrap: wrap; gap: 12px; margin: 12px 0; }}
      .tile {{
        border: 1px solid var(--stroke); border-radius: 12px; padding: 10px 14px;
        min-width: 140px;
      }}
      .tile .label {{ color: var(--muted); font-size: 12px; }}
      .tile .value {{ font-size: 20px; font-weight: 600; }}
      .ratio {{ color: var(--muted); margin: 8px 0; }}
      .history {{ color: var(--muted); font-size: 13px; margin: 8px 0; }}
      .history .point {{ margin-right: 6px; }}
      .actions {{ display: flex; flex-wrap: wrap; gap: 16px; margin: 14px 0; }}
      .actions form {{ display: flex; gap: 8px; align-items: center; }}
      select, input[type="text"] {{
        background: var(--bg); color: var(--text); border: 1px solid var(--stroke);
        border-radius: 8px; padding: 6px 8px;
      }}
      .btn {{
        border: 1px solid var(--stroke); border-radius: 8px; padding: 6px 14px;
        background: var(--panel); color: var(--text); cursor: pointer;
      }}
      .btn.good {{ border-color: var(--good); }}
      .btn.bad {{ border-color: var(--bad); }}
      table {{ width: 100%; border-collapse: collapse; }}
      th, td {{ text-align: left; padding: 6px 8px; border-bottom: 1px solid var(--stroke); }}
      .num {{ text-align: right; }}
      .muted {{ color: var(--muted); }}
    </style>
  </head>
  <body>
    <div class="wrap">
      <h1>Wheelhouse</h1>
      <div class="tabs">
        <a class="{wheel_class}" href="/?active_tab=wheel">Spinning Wheel</a>
        <a class="{odds_class}" href="/?active_tab=odds">Odds or Evens</a>
      </div>
      {panel}
      {messages}
      <div class="panel">
        <h2>Song IDs</h2>
        {playlist}
      </div>
    </div>
  </body>
</html>"#,
        messages = messages_block(),
        playlist = playlist_table(songs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, name: &str) -> SongEntry {
        SongEntry {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn wheel_tab_shows_placeholder_before_any_spin() {
        let doc = StatsDocument::default();
        let html = render(&doc, "wheel", &[]);
        assert!(html.contains("Start Spinning!"));
        assert!(html.contains("Win 0% / Loss 0%"));
        assert!(html.contains("No winners recorded yet."));
    }

    #[test]
    fn odds_tab_renders_odds_panel() {
        let mut doc = StatsDocument::default();
        doc.record_odds_evens_loss(10_000);
        let html = render(&doc, "odds", &[]);
        assert!(html.contains("Odds or Evens"));
        assert!(html.contains("10,000"));
        assert!(!html.contains("Leaderboard"));
    }

    #[test]
    fn leaderboard_names_are_title_cased_and_escaped() {
        let mut doc = StatsDocument::default();
        doc.record_wheel_win(25_000, Some("john <b>smith</b>"));
        let html = render(&doc, "wheel", &[]);
        assert!(html.contains("John &lt;B&gt;Smith&lt;/B&gt;"));
        assert!(!html.contains("<b>smith</b>"));
    }

    #[test]
    fn playlist_rows_render_in_order() {
        let doc = StatsDocument::default();
        let songs = vec![song("123", "First"), song("456", "Unknown Song")];
        let html = render(&doc, "wheel", &songs);
        let first = html.find("First").unwrap();
        let second = html.find("Unknown Song").unwrap();
        assert!(first < second);
    }
}
