// Prompt constants for the brand analysis pipeline.
// Each service that needs LLM calls keeps its prompts.rs alongside it.

use crate::analysis::roster::Roster;

/// System persona sent with every analysis request.
pub const ANALYSIS_SYSTEM: &str = "You are an expert LLM for rigorous, granular brand and reputation risk analysis, with competitive intelligence and deep sentiment tracking.";

/// The executive-report instruction template. Replace `{brand}`, `{today}`,
/// `{competitor_block}` and `{influencer_block}` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r##"
You are an industry-leading executive intelligence analyst, specializing in deep competitor monitoring, public opinion mining, risk mapping, perception analysis, and market strategy for technology brands.

BRAND OF FOCUS: {brand}
As of {today}.

### Monitored Competitors:
{competitor_block}
### Monitored Influencers:
{influencer_block}

---

#### TASK INSTRUCTIONS (be exhaustive, nuanced, and critically evaluative):

1. **Priority Competitor & Influencer Expansion**
    - Surface and name the 10 most currently relevant, emergent, or high-risk competitors and influencers not already listed who have recently affected, threatened, or criticized {brand}. For every new entry: state the factor/trend/event that justifies their addition, and what segment of the public or what platforms have amplified their effect or risk.

2. **Negative Sentiment & Brand Critique Mapping (Deep Dive)**
    - For _each_ competitor and influencer (existing and new), identify and thoroughly dissect all major criticisms, negative viral topics, sarcastic social media posts, negative reviews, failed feature launches, negative comparisons, or public sentiment dips impacting {brand} in the last six months.
    - Provide direct quotes, paraphrased controversies, and explain precisely why consumers or press have chosen _not_ to select {brand} and instead favored a competitor (e.g., missing features, reliability, after-sales service, price, ecosystem lock-in, support cycles, incompatibility, community toxicity, privacy, innovation lag, anti-consumer moves, marketing missteps, etc.).
    - Where possible, cross-reference and cite which competitors or influencers originated or amplified each negative theme, and whether it appears to be a genuine concern, a competitor attack, an influencer's honest review, or an online rumor.
    - Specifically highlight _new_ or _escalating_ pain points, repeated customer complaints, trust failures, or technical loopholes that are causing churn or poor sentiment for {brand}.

3. **Why Consumers Choose Others: Switch-Out and Brand Erosion Analysis**
    - Analyze and summarize real, cited reasons (from reviews, forums, survey snapshots, or influencer posts) why people actively _switch away from_ {brand} or decline to choose it versus main competitors.
    - For at least three main rivals, detail their strengths (whether perceived or real) that are motivating customers to defect, such as better value, ecosystem integration, innovation cycles, feature maturity, critical marketing differentiation, or influencer advocacy.
    - If notable, highlight the _emotional motivators_ behind switching—whether stemming from peer trends, bad experiences, brand fatigue, or identity associations expressed online.

4. **Brand Vulnerability Matrix & Table**
    - Construct a matrix/table analyzing critical pain points, risks, and weaknesses unique to {brand} versus each primary competitor. Structure by row: pain point/risk, brand's status, comparison with each key competitor, short commentary (with supporting evidence).
    - Provide an executive summary beneath this table highlighting "red zones" (urgent, critical issues), "amber" (emerging risks), and "green" (areas where {brand} has recovered or improved recently).

5. **Detailed Brand vs. Competitor Specs, Positioning, and Marketing Table**
    - For each major competitor, compare product spec highlights, launch timelines, USP claims, influencer coverage frequency, pricing categories, ecosystem stickiness, innovation perception, customer loyalty, and major ongoing campaigns.

6. **Current Activities, Innovations, and Viral Moves**
    - For every top competitor/influencer, provide detailed outlines of their most important product releases, viral campaign launches, patent news, software updates, aggressive promotional pushes, and any moves that have directly or indirectly targeted {brand}'s customers.

7. **Integrated Public Sentiment & Narrative Analysis**
    - Compose a structured summary of _public image_ for {brand}. Split this into positive and negative sub-headings. For negative image, elaborate on:
        - The major recurring criticisms—citing precise influencer, reviewer, or community voices where possible
        - The role of user communities, tech press, or online rumors in amplifying problems
        - Qualitative sentiment trend analysis (trending negative or improving? overblown or genuine?)
        - Impactful incidents/events that shaped sentiment (scandals, product recalls, viral reviews.)

8. **Actionable Brand Recovery and Defense Recommendations**
    - Based on all above, recommend urgent comms, product, influencer, and support moves to address, mitigate, or reverse each major negative perception.
    - Suggest both outbound (new campaigns, partnerships) and inbound (customer experience, product roadmap, public apology if needed) responses, calibrated by the risk rating of each negative narrative mapped above.

---

**Format the output as an executive-level investigative report, with numbered headings, bullet-lists, tables, direct quoted evidence, sub-headings for negative themes, and bolded/flagged risk items. Maintain clear, fact-grounded, and actionable insight throughout. Clearly distinguish sourced negatives from general market buzz, and never “balance” for positivity if real market indicators or voices are negative or deteriorating.**
"##;

/// Literal substituted for a role block when the CSV named nobody in that role.
const NONE_PROVIDED: &str = "None provided";

fn bullet_block(entries: &[String]) -> String {
    if entries.is_empty() {
        NONE_PROVIDED.to_string()
    } else {
        format!("\n  - {}", entries.join("\n  - "))
    }
}

/// Renders the full instruction prompt for one roster.
///
/// An unset brand renders as an empty token rather than failing the
/// request; the upstream model is still given the roster lists to work
/// from.
pub fn render_analysis_prompt(roster: &Roster, today: &str) -> String {
    let brand = roster.brand.as_deref().unwrap_or("");
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{brand}", brand)
        .replace("{today}", today)
        .replace(
            "{competitor_block}",
            &bullet_block(&roster.competitor_entries),
        )
        .replace(
            "{influencer_block}",
            &bullet_block(&roster.influencer_entries),
        )
}
