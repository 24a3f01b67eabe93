//! Saved search models.
//!
//! Field names match Splunk's `saved/searches` parameters. Encoding rules:
//! - Most string and numeric settings are omitted when empty or zero.
//! - Boolean switches are always sent, so `false` can turn a setting off.
//! - Server-computed fields (`action.email`, `qualifiedSearch`, ...) are never sent.

use serde::{Deserialize, Serialize};

use crate::form::{FormEncode, FormParams, form_model};
use crate::models::acl::Acl;
use crate::models::feed::{HasLinks, Links};
use crate::serde_helpers::null_as_default;

/// App a new saved search is created in.
pub const DEFAULT_APP: &str = "search";

form_model! {
    /// Every configurable setting of a saved search.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct SavedSearchConfiguration {
        /// Whether the email action is enabled. Computed from `actions`.
        action_email: bool => "action.email", Never;
        action_email_auth_password: String => "action.email.auth_password", OmitEmpty;
        action_email_bcc: String => "action.email.bcc", OmitEmpty;
        action_email_cc: String => "action.email.cc", OmitEmpty;
        action_email_auth_username: String => "action.email.auth_username", OmitEmpty;
        action_email_command: String => "action.email.command", OmitEmpty;
        /// `plain`, `html`, `raw` or `csv`.
        action_email_format: String => "action.email.format", OmitEmpty;
        action_email_from: String => "action.email.from", OmitEmpty;
        action_email_hostname: String => "action.email.hostname", OmitEmpty;
        action_email_inline: bool => "action.email.inline", Always;
        action_email_mailserver: String => "action.email.mailserver", OmitEmpty;
        action_email_maxresults: i64 => "action.email.maxresults", OmitEmpty;
        action_email_maxtime: String => "action.email.maxtime", OmitEmpty;
        action_email_message_alert: String => "action.email.message.alert", OmitEmpty;
        action_email_pdfview: String => "action.email.pdfview", OmitEmpty;
        action_email_preprocess_results: String => "action.email.preprocess_results", OmitEmpty;
        action_email_report_cid_font_list: String => "action.email.reportCIDFontList", OmitEmpty;
        action_email_report_include_splunk_logo: bool => "action.email.reportIncludeSplunkLogo", Always;
        action_email_report_paper_orientation: String => "action.email.reportPaperOrientation", OmitEmpty;
        action_email_report_paper_size: String => "action.email.reportPaperSize", OmitEmpty;
        action_email_report_server_enabled: bool => "action.email.reportServerEnabled", Always;
        action_email_report_server_url: String => "action.email.reportServerURL", OmitEmpty;
        action_email_sendpdf: bool => "action.email.sendpdf", Always;
        action_email_sendresults: bool => "action.email.sendresults", Always;
        action_email_subject: String => "action.email.subject", OmitEmpty;
        /// Comma-separated recipients. Required when the email action is on.
        action_email_to: String => "action.email.to", OmitEmpty;
        action_email_track_alert: bool => "action.email.track_alert", Always;
        action_email_ttl: String => "action.email.ttl", OmitEmpty;
        action_email_use_ssl: bool => "action.email.use_ssl", Always;
        action_email_use_tls: bool => "action.email.use_tls", Always;
        action_email_width_sort_columns: bool => "action.email.width_sort_columns", Always;
        action_populate_lookup: bool => "action.populate_lookup", Always;
        action_populate_lookup_command: String => "action.populate_lookup.command", OmitEmpty;
        /// Lookup table name or CSV path the results are written to.
        action_populate_lookup_dest: String => "action.populate_lookup.dest", OmitEmpty;
        action_populate_lookup_hostname: String => "action.populate_lookup.hostname", OmitEmpty;
        action_populate_lookup_maxresults: i64 => "action.populate_lookup.maxresults", OmitEmpty;
        action_populate_lookup_maxtime: String => "action.populate_lookup.maxtime", OmitEmpty;
        action_populate_lookup_track_alert: bool => "action.populate_lookup.track_alert", Always;
        action_populate_lookup_ttl: String => "action.populate_lookup.ttl", OmitEmpty;
        /// Whether the RSS action is enabled. Computed from `actions`.
        action_rss: bool => "action.rss", Never;
        action_rss_command: String => "action.rss.command", OmitEmpty;
        action_rss_hostname: String => "action.rss.hostname", OmitEmpty;
        action_rss_maxresults: i64 => "action.rss.maxresults", OmitEmpty;
        action_rss_maxtime: String => "action.rss.maxtime", OmitEmpty;
        action_rss_track_alert: bool => "action.rss.track_alert", Always;
        action_rss_ttl: String => "action.rss.ttl", OmitEmpty;
        /// Whether the script action is enabled. Computed from `actions`.
        action_script: bool => "action.script", Never;
        action_script_command: String => "action.script.command", OmitEmpty;
        action_script_filename: String => "action.script.filename", OmitEmpty;
        action_script_hostname: String => "action.script.hostname", OmitEmpty;
        action_script_maxresults: i64 => "action.script.maxresults", OmitEmpty;
        action_script_maxtime: String => "action.script.maxtime", OmitEmpty;
        action_script_track_alert: bool => "action.script.track_alert", Always;
        action_script_ttl: String => "action.script.ttl", OmitEmpty;
        /// Whether the Slack action is enabled. Computed from `actions`.
        action_slack: bool => "action.slack", Never;
        action_slack_param_channel: String => "action.slack.param.channel", OmitEmpty;
        action_slack_param_message: String => "action.slack.param.message", OmitEmpty;
        action_summary_index: i64 => "action.summary_index", OmitEmpty;
        action_summary_index_name: String => "action.summary_index._name", OmitEmpty;
        action_summary_index_command: String => "action.summary_index.command", OmitEmpty;
        action_summary_index_hostname: String => "action.summary_index.hostname", OmitEmpty;
        action_summary_index_inline: bool => "action.summary_index.inline", Always;
        action_summary_index_maxresults: i64 => "action.summary_index.maxresults", OmitEmpty;
        action_summary_index_maxtime: String => "action.summary_index.maxtime", OmitEmpty;
        action_summary_index_track_alert: bool => "action.summary_index.track_alert", Always;
        action_summary_index_ttl: String => "action.summary_index.ttl", OmitEmpty;
        /// Comma-separated list of enabled actions, e.g. `email,slack`.
        actions: String => "actions", OmitEmpty;
        alert_digest_mode: bool => "alert.digest_mode", Always;
        alert_expires: String => "alert.expires", OmitEmpty;
        /// 1 (debug) through 6 (fatal).
        alert_severity: i64 => "alert.severity", OmitEmpty;
        alert_suppress: bool => "alert.suppress", Always;
        alert_suppress_fields: String => "alert.suppress.fields", OmitEmpty;
        alert_suppress_period: String => "alert.suppress.period", OmitEmpty;
        alert_track: String => "alert.track", OmitEmpty;
        alert_comparator: String => "alert_comparator", OmitEmpty;
        alert_condition: String => "alert_condition", OmitEmpty;
        alert_threshold: String => "alert_threshold", OmitEmpty;
        alert_type: String => "alert_type", OmitEmpty;
        auto_summarize: bool => "auto_summarize", Always;
        auto_summarize_command: String => "auto_summarize.command", OmitEmpty;
        auto_summarize_cron_schedule: String => "auto_summarize.cron_schedule", OmitEmpty;
        auto_summarize_dispatch_earliest_time: String => "auto_summarize.dispatch.earliest_time", OmitEmpty;
        auto_summarize_dispatch_latest_time: String => "auto_summarize.dispatch.latest_time", OmitEmpty;
        auto_summarize_dispatch_time_format: String => "auto_summarize.dispatch.time_format", OmitEmpty;
        auto_summarize_dispatch_ttl: String => "auto_summarize.dispatch.ttl", OmitEmpty;
        auto_summarize_max_disabled_buckets: i64 => "auto_summarize.max_disabled_buckets", OmitEmpty;
        auto_summarize_max_summary_ratio: f64 => "auto_summarize.max_summary_ratio", OmitEmpty;
        auto_summarize_max_summary_size: i64 => "auto_summarize.max_summary_size", OmitEmpty;
        auto_summarize_max_time: i64 => "auto_summarize.max_time", OmitEmpty;
        auto_summarize_suspend_period: String => "auto_summarize.suspend_period", OmitEmpty;
        auto_summarize_timespan: String => "auto_summarize.timespan", OmitEmpty;
        cron_schedule: String => "cron_schedule", OmitEmpty;
        description: String => "description", OmitEmpty;
        disabled: bool => "disabled", Always;
        dispatch_buckets: i64 => "dispatch.buckets", OmitEmpty;
        dispatch_earliest_time: String => "dispatch.earliest_time", OmitEmpty;
        dispatch_indexed_realtime: bool => "dispatch.indexedRealtime", Always;
        dispatch_latest_time: String => "dispatch.latest_time", OmitEmpty;
        dispatch_lookups: bool => "dispatch.lookups", Always;
        dispatch_max_count: i64 => "dispatch.max_count", OmitEmpty;
        dispatch_max_time: i64 => "dispatch.max_time", OmitEmpty;
        dispatch_reduce_freq: i64 => "dispatch.reduce_freq", OmitEmpty;
        dispatch_rt_backfill: bool => "dispatch.rt_backfill", Always;
        dispatch_spawn_process: bool => "dispatch.spawn_process", Always;
        dispatch_time_format: String => "dispatch.time_format", OmitEmpty;
        dispatch_ttl: String => "dispatch.ttl", OmitEmpty;
        displayview: String => "displayview", OmitEmpty;
        is_scheduled: bool => "is_scheduled", Always;
        is_visible: bool => "is_visible", Always;
        max_concurrent: i64 => "max_concurrent", OmitEmpty;
        /// Computed by the scheduler.
        next_scheduled_time: String => "next_scheduled_time", Never;
        /// The search as Splunk will run it, with macros and the `search` prefix applied.
        qualified_search: String => "qualifiedSearch", Never;
        realtime_schedule: bool => "realtime_schedule", Always;
        request_ui_dispatch_app: String => "request.ui_dispatch_app", OmitEmpty;
        request_ui_dispatch_view: String => "request.ui_dispatch_view", OmitEmpty;
        restart_on_searchpeer_add: bool => "restart_on_searchpeer_add", Always;
        run_on_startup: bool => "run_on_startup", Always;
        /// The search query. Always sent.
        search: String => "search", Always;
        vsid: String => "vsid", OmitEmpty;
    }
}

/// A saved search as Splunk returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Links,
    #[serde(default, deserialize_with = "null_as_default")]
    pub acl: Acl,
    #[serde(rename = "content", default, deserialize_with = "null_as_default")]
    pub configuration: SavedSearchConfiguration,
}

impl SavedSearch {
    pub fn new(name: impl Into<String>, configuration: SavedSearchConfiguration) -> Self {
        Self {
            name: name.into(),
            configuration,
            ..Default::default()
        }
    }

    /// Form for the create call: name, configuration, then the owning app.
    pub fn create_form(&self) -> FormParams {
        let mut form = FormParams::new();
        form.push("name", self.name.as_str());
        form.extend(self.configuration.to_form());
        form.push("defaultApp", DEFAULT_APP);
        form
    }
}

impl HasLinks for SavedSearch {
    fn links(&self) -> &Links {
        &self.links
    }
}
