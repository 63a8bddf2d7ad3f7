// Code generated by generate_sensision_metrics from
// io/warp10/continuum/sensision/SensisionConstants.java (warp10-platform 2.7.x).
// DO NOT EDIT BY HAND; regenerate against the target Warp10 release instead.

/// Sensision metric vocabulary: (canonical name, help, ordered label names).
///
/// Canonical names are the Sensision class names with every `.` replaced by
/// `_`. The label order is the order the exporter emits label values in.
pub(crate) const METRICS: &[(&str, &str, &[&str])] = &[
    (
        "warpscript_run_count",
        "Number of runs of WarpScripts bootstrapped by runners",
        &["path"],
    ),
    (
        "warpscript_run_failures",
        "Number of failed runs of WarpScripts bootstrapped by runners",
        &["path"],
    ),
    (
        "warpscript_run_time_us",
        "Total time (in us) spent running WarpScripts via runners",
        &["path"],
    ),
    (
        "warpscript_run_elapsed",
        "Total elapsed time (in us) of the last run of each WarpScript",
        &["path"],
    ),
    (
        "warpscript_run_fetched",
        "Total number of datapoints fetched during runs of WarpScripts",
        &["path"],
    ),
    (
        "warpscript_run_ops",
        "Total number of WarpScript operations performed during runs",
        &["path"],
    ),
    (
        "warpscript_function_count",
        "Number of invocations of each WarpScript function",
        &["function"],
    ),
    (
        "warpscript_function_time_us",
        "Total time (in us) spent in each WarpScript function",
        &["function"],
    ),
    (
        "warpscript_fetchcount_exceeded",
        "Number of WarpScript executions which exceeded their fetch count",
        &["consumer"],
    ),
    (
        "warpscript_requests",
        "Number of WarpScript execution requests received",
        &[],
    ),
    (
        "warpscript_time_us",
        "Total time (in us) spent executing WarpScript requests",
        &[],
    ),
    (
        "warpscript_ops",
        "Total number of WarpScript operations performed while executing requests",
        &[],
    ),
    (
        "continuum_fetch_bytes_values",
        "Total number of bytes of values fetched per consumer",
        &["consumer", "app", "consumerapp"],
    ),
    (
        "continuum_fetch_bytes_keys",
        "Total number of bytes of keys fetched per consumer",
        &["consumer", "app", "consumerapp"],
    ),
    (
        "continuum_fetch_datapoints",
        "Total number of datapoints fetched per consumer",
        &["consumer", "app", "consumerapp"],
    ),
    (
        "continuum_fetch_bytes_values_perowner",
        "Total number of bytes of values fetched per owner",
        &["consumer", "app", "owner", "consumerapp"],
    ),
    (
        "continuum_fetch_bytes_keys_perowner",
        "Total number of bytes of keys fetched per owner",
        &["consumer", "app", "owner", "consumerapp"],
    ),
    (
        "continuum_fetch_datapoints_perowner",
        "Total number of datapoints fetched per owner",
        &["consumer", "app", "owner", "consumerapp"],
    ),
    (
        "continuum_fetch_count",
        "Number of fetch operations performed per application",
        &["app"],
    ),
    (
        "continuum_fetch_requests",
        "Number of fetch requests received per request type",
        &["type"],
    ),
    (
        "continuum_ingress_update_requests",
        "Number of update requests received by Ingress",
        &[],
    ),
    (
        "continuum_ingress_update_gzipped",
        "Number of gzipped update requests received by Ingress",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_update_parseerrors",
        "Number of parse errors encountered while ingesting datapoints",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_update_datapoints_raw",
        "Number of raw datapoints ingested per producer and application",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_update_time_us",
        "Total time (in us) spent ingesting datapoints",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_meta_gzipped",
        "Number of gzipped metadata requests received by Ingress",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_meta_invalid",
        "Number of invalid metadata records received by Ingress",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_meta_records",
        "Number of metadata records received by Ingress",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_delete_requests",
        "Number of delete requests received by Ingress",
        &["producer", "app"],
    ),
    (
        "continuum_ingress_delete_gts",
        "Number of Geo Time Series deleted via Ingress",
        &["producer", "app"],
    ),
    (
        "continuum_throttling_gts",
        "Current number of Geo Time Series considered for throttling per producer",
        &["producer"],
    ),
    (
        "continuum_throttling_gts_per_app",
        "Current number of Geo Time Series considered for throttling per application",
        &["app"],
    ),
    (
        "continuum_throttling_rate",
        "Current MADS throttling rate per producer",
        &["producer"],
    ),
    (
        "continuum_throttling_rate_per_app",
        "Current MADS throttling rate per application",
        &["app"],
    ),
    (
        "continuum_gts_distinct",
        "Current number of distinct Geo Time Series per producer",
        &["producer"],
    ),
    (
        "continuum_gts_distinct_per_app",
        "Current number of distinct Geo Time Series per application",
        &["app"],
    ),
    (
        "continuum_estimator_resets",
        "Number of resets of the cardinality estimator per producer",
        &["producer"],
    ),
    (
        "continuum_estimator_resets_per_app",
        "Number of resets of the cardinality estimator per application",
        &["app"],
    ),
    (
        "continuum_directory_gts",
        "Current number of Geo Time Series managed by Directory",
        &[],
    ),
    (
        "continuum_directory_classes",
        "Current number of distinct classes managed by Directory",
        &[],
    ),
    (
        "continuum_directory_owners",
        "Current number of distinct owners managed by Directory",
        &[],
    ),
    (
        "continuum_directory_gts_perapp",
        "Current number of Geo Time Series managed by Directory per application",
        &["app"],
    ),
    (
        "continuum_sfetch_wrappers_perapp",
        "Number of wrappers served by split fetch per application",
        &["app"],
    ),
    (
        "continuum_sfetch_wrappers_size_perapp",
        "Total size of wrappers served by split fetch per application",
        &["app"],
    ),
    (
        "continuum_sfetch_wrappers_datapoints_perapp",
        "Total number of datapoints in wrappers served by split fetch per application",
        &["app"],
    ),
    (
        "quasar_filter_token_count",
        "Number of token filterings performed per token type",
        &["type", "error"],
    ),
    (
        "quasar_filter_token_time_us",
        "Total time (in us) spent filtering tokens per token type",
        &["type", "error"],
    ),
    (
        "warp_datalog_forwarder_requests_forwarded",
        "Number of datalog requests forwarded per forwarder",
        &["forwarder", "id", "type"],
    ),
    (
        "warp_datalog_forwarder_requests_failed",
        "Number of datalog requests which failed to be forwarded per forwarder",
        &["forwarder", "id", "type"],
    ),
    (
        "warp_datalog_forwarder_requests_ignored",
        "Number of datalog requests ignored per forwarder",
        &["forwarder", "id", "type"],
    ),
    (
        "warp_datalog_requests_received",
        "Number of datalog requests received per datalog id",
        &["id", "type"],
    ),
    (
        "warp_datalog_requests_logged",
        "Number of datalog requests logged per datalog id",
        &["id", "type"],
    ),
    (
        "warp_kafka_consumer_offset_forward_leaps",
        "Number of forward leaps of Kafka consumer offsets",
        &["topic", "groupid", "partition"],
    ),
    (
        "warp_kafka_consumer_offset_backward_leaps",
        "Number of backward leaps of Kafka consumer offsets",
        &["topic", "groupid", "partition"],
    ),
    (
        "plasma_backend_subscriptions_invalid_hashes",
        "Number of invalid hashes seen in Plasma backend subscriptions",
        &["topic"],
    ),
];
