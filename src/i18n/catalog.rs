// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in translation catalog for the dashboard UI.
//!
//! Every user-facing string of the dashboard is listed here once, as
//! `(key, zh, en)`, grouped by the UI area that renders it. Lookup structures
//! are built from these rows by [`TranslationTable::builtin`](super::TranslationTable::builtin).
//!
//! ## Adding a new key
//!
//! Add one row to the table of the area that displays it. Both columns must
//! be filled in; a `""` column is displayed as the raw key.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard region a translation key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Navigation,
    Status,
    Home,
    Watchlist,
    HotTopics,
    Crypto,
    History,
    Overview,
}

impl Area {
    pub fn all() -> &'static [Area] {
        &[
            Area::Navigation,
            Area::Status,
            Area::Home,
            Area::Watchlist,
            Area::HotTopics,
            Area::Crypto,
            Area::History,
            Area::Overview,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Area::Navigation => "navigation",
            Area::Status => "status",
            Area::Home => "home",
            Area::Watchlist => "watchlist",
            Area::HotTopics => "hot_topics",
            Area::Crypto => "crypto",
            Area::History => "history",
            Area::Overview => "overview",
        }
    }

    /// Rows of this area, in display order.
    pub(crate) fn rows(self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            Area::Navigation => NAVIGATION,
            Area::Status => STATUS,
            Area::Home => HOME,
            Area::Watchlist => WATCHLIST,
            Area::HotTopics => HOT_TOPICS,
            Area::Crypto => CRYPTO,
            Area::History => HISTORY,
            Area::Overview => OVERVIEW,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area of a built-in key, or `None` if the key is not in the catalog.
pub fn area_of(key: &str) -> Option<Area> {
    Area::all()
        .iter()
        .copied()
        .find(|area| area.rows().iter().any(|&(k, _, _)| k == key))
}

/// All built-in rows with their area, in catalog order.
pub(crate) fn rows() -> impl Iterator<Item = (Area, &'static str, &'static str, &'static str)> {
    Area::all()
        .iter()
        .flat_map(|&area| area.rows().iter().map(move |&(k, zh, en)| (area, k, zh, en)))
}

// ─── Navigation ─────────────────────────────────────────────────────

const NAVIGATION: &[(&str, &str, &str)] = &[
    ("nav_dashboard", "概览仪表盘", "Dashboard"),
    ("nav_watchlist", "自选监控", "Watchlist"),
    ("nav_hot_topics", "全网热搜", "Hot Topics"),
    ("nav_crypto", "加密货币", "Crypto"),
    ("nav_history", "历史报告", "History"),
    ("nav_overview", "项目总览", "Overview"),
];

// ─── System status ──────────────────────────────────────────────────

const STATUS: &[(&str, &str, &str)] = &[
    ("system_status", "系统状态", "System Status"),
    ("connection_status", "连接状态", "Connection"),
    ("last_sync", "上次同步", "Last Sync"),
    ("version", "版本", "Version"),
];

// ─── Home dashboard ─────────────────────────────────────────────────

const HOME: &[(&str, &str, &str)] = &[
    // KPI panels
    ("market_sentiment", "市场情绪", "MARKET SENTIMENT"),
    ("key_events", "关键事件", "KEY EVENTS"),
    ("stock_prediction", "个股预测", "STOCK PREDICTION"),
    ("hot_topics", "热门话题", "HOT TOPICS"),
    ("market_outlook", "市场展望", "MARKET OUTLOOK"),
    ("statistics", "统计数据", "STATISTICS"),
    ("total_news", "已分析新闻", "Total News"),
    ("market_sentiment_kpi", "市场情绪", "Sentiment"),
    ("hot_topics_kpi", "热门话题", "Hot Topics"),
    ("updated_at", "更新时间", "Updated"),
    ("system_online", "系统在线", "System Online"),
    ("loading", "正在加载数据...", "Loading data..."),
    ("empty_events", "暂无重大事件", "No key events found"),
    ("empty_topics", "暂无热门话题", "No hot topics found"),
    ("beijing_time", "北京时间", "Beijing Time"),
    ("newyork_time", "纽约时间", "New York Time"),
    ("event_count", "重大事件", "Key Events"),
    ("stock_signal_count", "股票信号", "Stock Signals"),
    // Sentiment and scoring
    ("positive", "积极", "Positive"),
    ("neutral", "中性", "Neutral"),
    ("negative", "消极", "Negative"),
    ("confidence", "置信度", "Confidence"),
    ("mentions", "提及", "Mentions"),
    ("times", "次", "times"),
    // Branding
    ("brand_title", "金融终端", "FINANCE TERMINAL"),
    ("brand_subtitle", "DeepSeek 智能引擎", "DeepSeek AI ENGINE"),
    // Markets and trends
    ("market_global", "全球市场", "Global Market"),
    ("market_cn", "中国市场", "China Market"),
    ("market_us", "美国市场", "US Market"),
    ("market_a_share", "A股", "A-Share"),
    ("market_us_stock", "美股", "US Stock"),
    ("market_global_short", "全球", "Global"),
    ("trend_bullish", "看涨", "Bullish"),
    ("trend_bearish", "看跌", "Bearish"),
    ("trend_sideways", "震荡", "Sideways"),
    // Counter suffixes; blank in English.
    ("unit_items", "条", ""),
    ("unit_count", "个", ""),
];

// ─── Watchlist ──────────────────────────────────────────────────────

const WATCHLIST: &[(&str, &str, &str)] = &[
    ("watchlist_title", "我的关注列表", "MY WATCHLIST"),
    ("add_stock", "添加", "Add"),
    ("stock_code", "代码", "Code"),
    ("stock_name", "名称", "Name"),
    ("current_price", "最新价", "Price"),
    ("change_pct", "涨跌幅", "Change"),
    ("high", "最高", "High"),
    ("low", "最低", "Low"),
    ("open", "今开", "Open"),
    ("prev_close", "昨收", "Prev Close"),
    ("volume", "成交量", "Volume"),
    ("amount", "成交额", "Amount"),
    ("action", "操作", "Action"),
    ("delete", "删除", "Del"),
    ("view", "查看", "View"),
    ("kline_chart", "K线走势", "K-Line Chart"),
    ("related_news", "相关资讯", "Related News"),
    ("period_daily", "日K", "D"),
    ("period_weekly", "周K", "W"),
    ("period_monthly", "月K", "M"),
    ("no_data", "暂无数据", "No Data"),
    ("loading_chart", "加载中...", "Loading..."),
];

// ─── Hot topics ─────────────────────────────────────────────────────

const HOT_TOPICS: &[(&str, &str, &str)] = &[
    ("hot_topics_title", "全网热搜", "HOT TOPICS"),
    ("sources", "来源", "SOURCES"),
    ("update", "更新", "UPDATE"),
    ("no_data_or_failed", "暂无数据或采集失败", "No data or fetch failed"),
];

// ─── Crypto ─────────────────────────────────────────────────────────

const CRYPTO: &[(&str, &str, &str)] = &[
    ("crypto_title", "加密货币", "CRYPTOCURRENCY"),
    ("market_cap", "市值", "MARKET CAP"),
    ("volume_24h", "24h成交量", "24h Volume"),
    ("price_change_24h", "24h涨跌", "24h Change"),
];

// ─── Historical reports ─────────────────────────────────────────────

const HISTORY: &[(&str, &str, &str)] = &[
    ("history_title", "历史报告", "HISTORICAL REPORTS"),
    ("report_list", "时间轴", "Timeline"),
    ("report_content", "报告内容", "Report"),
    ("select_report", "请选择一份报告查看", "Select a report to view"),
];

// ─── Project overview ───────────────────────────────────────────────

const OVERVIEW: &[(&str, &str, &str)] = &[
    ("overview_title", "项目总览", "PROJECT OVERVIEW"),
    ("features", "功能模块", "Features"),
    ("data_coverage", "数据覆盖", "Data Coverage"),
    ("quick_start", "快速开始", "Quick Start"),
];
