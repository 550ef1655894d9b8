use interfaces_reddit_rising::index::Submission;

/// Prefix for the relative `permalink` Reddit returns.
pub const PERMALINK_HOST: &str = "https://reddit.com";

/// The five fields of a submission that end up in the Discord embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub title: String,
    pub permalink: String,
    pub author: String,
    pub score: i64,
    pub image_url: String,
}

impl SubmissionSummary {
    pub fn from_submission(submission: Submission) -> Self {
        Self {
            permalink: format!("{PERMALINK_HOST}{}", submission.permalink),
            title: submission.title,
            author: submission.author,
            score: submission.score,
            image_url: submission.url,
        }
    }

    /// Markdown body of the embed: linked title, author, score.
    pub fn message(&self) -> String {
        format!(
            "[{}]({})\nby **{}**\n**{}** points",
            self.title,
            self.permalink,
            self.author,
            format_score(self.score)
        )
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn format_score(score: i64) -> String {
    let digits = score.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if score < 0 {
        grouped.push('-');
    }

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(7), "7");
        assert_eq!(format_score(999), "999");
        assert_eq!(format_score(1000), "1,000");
        assert_eq!(format_score(12345), "12,345");
        assert_eq!(format_score(999999), "999,999");
        assert_eq!(format_score(1234567), "1,234,567");
        assert_eq!(format_score(i64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn negative_scores_keep_sign() {
        assert_eq!(format_score(-5), "-5");
        assert_eq!(format_score(-1234), "-1,234");
        assert_eq!(format_score(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn summary_from_submission() {
        let summary = SubmissionSummary::from_submission(Submission {
            title: "Cat".into(),
            permalink: "/r/pics/abc".into(),
            author: "jdoe".into(),
            score: 1234,
            url: "http://img/x.png".into(),
        });

        assert_eq!(summary.permalink, "https://reddit.com/r/pics/abc");
        assert_eq!(summary.image_url, "http://img/x.png");
        assert_eq!(
            summary.message(),
            "[Cat](https://reddit.com/r/pics/abc)\nby **jdoe**\n**1,234** points"
        );
    }

    #[test]
    fn markdown_in_title_is_left_alone() {
        let summary = SubmissionSummary {
            title: "*bold* [x]".into(),
            permalink: "https://reddit.com/r/a/b".into(),
            author: "__me__".into(),
            score: 0,
            image_url: String::new(),
        };

        assert_eq!(
            summary.message(),
            "[*bold* [x]](https://reddit.com/r/a/b)\nby **__me__**\n**0** points"
        );
    }
}
