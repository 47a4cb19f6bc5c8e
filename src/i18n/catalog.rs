//! Chinese message catalog.

use std::collections::HashMap;
use std::sync::LazyLock;

const ZH: &[(&str, &str)] = &[
    // Program and global options
    ("Query astronomical archives from the command line.", "在命令行中查询天文数据档案。"),
    ("Output language (e.g., 'en', 'zh').", "输出语言（例如 'en'、'zh'）。"),
    ("Save LANG as the default output language.", "将 LANG 保存为默认输出语言。"),
    ("Test connectivity to every archive.", "测试所有数据档案的连通性。"),
    ("Check local field lists against the fields each archive publishes.", "根据各档案公布的字段检查本地字段列表。"),
    ("Enable verbose logging.", "启用详细日志。"),
    ("Enable debug logging.", "启用调试日志。"),
    ("Print the elapsed time after the command.", "命令结束后打印耗时。"),
    ("Default language set to '{lang}'.", "默认语言已设置为 '{lang}'。"),
    ("Elapsed time: {elapsed}", "耗时：{elapsed}"),
    ("Error during {context}: {error}", "{context} 期间出错：{error}"),
    ("User interrupted the query. Exiting safely.", "用户中断了查询，正在安全退出。"),
    // Subcommand groups
    ("Query the SIMBAD astronomical database.", "查询 SIMBAD 天文数据库。"),
    ("Query the ALMA science archive.", "查询 ALMA 科学档案。"),
    ("Query the ESASky multi-mission archive.", "查询 ESASky 多任务档案。"),
    ("Query the Gaia archive.", "查询 Gaia 档案。"),
    ("Query the HEASARC database.", "查询 HEASARC 数据库。"),
    ("Query NASA/IPAC Infrared Science Archive (IRSA).", "查询 NASA/IPAC 红外科学档案（IRSA）。"),
    ("Query IRSA Galactic dust reddening and extinction.", "查询 IRSA 银河尘埃红化与消光。"),
    ("Query JPL Horizons for ephemerides, elements and vectors.", "查询 JPL Horizons 星历、轨道根数和状态矢量。"),
    ("Query the JPL Small-Body Database.", "查询 JPL 小天体数据库。"),
    ("Query the MAST archive.", "查询 MAST 档案。"),
    ("Search the NASA Astrophysics Data System.", "检索 NASA 天体物理数据系统。"),
    ("Query the NASA/IPAC Extragalactic Database (NED).", "查询 NASA/IPAC 河外数据库（NED）。"),
    ("Query the Splatalogue spectral line database.", "查询 Splatalogue 谱线数据库。"),
    ("Query the VizieR catalogue service.", "查询 VizieR 星表服务。"),
    // Shared table options
    ("Save the results to this file.", "将结果保存到此文件。"),
    ("Output file format (csv, tsv, json, votable, ipac, ascii).", "输出文件格式（csv、tsv、json、votable、ipac、ascii）。"),
    ("Maximum number of rows to display. Use -1 for all rows.", "最多显示的行数，使用 -1 显示全部行。"),
    ("Show all columns in the output table.", "在输出表格中显示所有列。"),
    ("Columns to keep (repeatable or comma separated). Use 'all' for all columns.", "要保留的列（可重复或以逗号分隔），使用 'all' 表示全部列。"),
    ("Column filters such as 'w1mpro>10' or 'ph_qual=A'. Can be repeated.", "列过滤条件，如 'w1mpro>10' 或 'ph_qual=A'，可重复使用。"),
    ("Results saved to {path}", "结果已保存到 {path}"),
    ("... {count} more rows (use --max-rows-display -1 to show all)", "……还有 {count} 行（使用 --max-rows-display -1 显示全部）"),
    ("... {count} more columns hidden (use --show-all-cols to show all)", "……另有 {count} 列已隐藏（使用 --show-all-cols 显示全部）"),
    ("The query returned no rows.", "查询没有返回任何行。"),
    // Common arguments
    ("Coordinates (e.g., '10.68 41.26', '00h42m44s +41d16m09s') or an object name.", "坐标（例如 '10.68 41.26'、'00h42m44s +41d16m09s'）或天体名称。"),
    ("Coordinates (e.g., '10.68 41.26') or an object name.", "坐标（例如 '10.68 41.26'）或天体名称。"),
    ("Coordinates (e.g., '10.68h +41.26d', 'M51').", "坐标（例如 '10.68h +41.26d'、'M51'）。"),
    ("Coordinates (e.g., '10.68h +41.26d', 'M31').", "坐标（例如 '10.68h +41.26d'、'M31'）。"),
    ("Search radius (e.g., '10arcsec', '0.5deg').", "搜索半径（例如 '10arcsec'、'0.5deg'）。"),
    ("Search radius around the object (default 5 arcsec).", "天体周围的搜索半径（默认 5 角秒）。"),
    ("Search radius around the object (default 10 arcsec).", "天体周围的搜索半径（默认 10 角秒）。"),
    ("Search radius around the object (default 1 arcmin).", "天体周围的搜索半径（默认 1 角分）。"),
    ("Search radius around the object (default 0.2 deg).", "天体周围的搜索半径（默认 0.2 度）。"),
    ("Name of the object (e.g., 'M31', 'Betelgeuse').", "天体名称（例如 'M31'、'Betelgeuse'）。"),
    ("Name of the object (e.g., 'Pleiades').", "天体名称（例如 'Pleiades'）。"),
    ("Name of the object (e.g., 'M81', 'NGC 1068').", "天体名称（例如 'M81'、'NGC 1068'）。"),
    ("Name of the object (e.g., 'M45').", "天体名称（例如 'M45'）。"),
    ("Name of the object (e.g., 'M101').", "天体名称（例如 'M101'）。"),
    ("Name of the target (e.g., 'M83').", "目标名称（例如 'M83'）。"),
    ("Only return publicly available data.", "只返回已公开的数据。"),
    ("Service", "服务"),
    ("Status", "状态"),
    ("Latency", "延迟"),
    ("Table", "数据表"),
    ("Result", "结果"),
    ("Field", "字段"),
    ("Value", "值"),
    ("unreachable", "无法连接"),
    // Diagnostics
    ("Archive connectivity", "档案连通性"),
    ("Field list check", "字段列表检查"),
    ("all fields valid", "所有字段有效"),
    ("invalid fields: {fields}", "无效字段：{fields}"),
    ("check failed: {error}", "检查失败：{error}"),
    ("{table} publishes no columns", "{table} 没有公布任何列"),
    // Coordinates and input validation
    ("A catalog is required.", "必须指定星表。"),
    ("A target is required.", "必须指定目标。"),
    ("Frequencies must be positive.", "频率必须为正数。"),
    ("--min-freq must not exceed --max-freq.", "--min-freq 不能大于 --max-freq。"),
    ("--radius is required when --ra and --dec are provided for a cone search.", "提供 --ra 和 --dec 进行锥形检索时必须指定 --radius。"),
    ("Region size must be between {min} and {max} degrees.", "区域大小必须在 {min} 到 {max} 度之间。"),
    ("Set ADS_DEV_KEY or ADS_API_TOKEN, or add ads_token to the config file.", "请设置 ADS_DEV_KEY 或 ADS_API_TOKEN，或在配置文件中添加 ads_token。"),
    ("MAST request did not complete in time.", "MAST 请求未能及时完成。"),
    // SIMBAD
    ("Query basic data for an object by name.", "按名称查询天体的基本数据。"),
    ("Query objects around a position.", "查询某位置周围的天体。"),
    ("List the columns of the SIMBAD basic table.", "列出 SIMBAD basic 表的列。"),
    ("Extra columns of the basic table to include (repeatable).", "额外包含的 basic 表列（可重复）。"),
    ("Ignoring invalid field name: {field}", "忽略无效字段名：{field}"),
    ("Querying SIMBAD for object: {name}...", "正在查询 SIMBAD 天体：{name}..."),
    ("Querying SIMBAD for region: '{coordinates}' with radius '{radius}'...", "正在查询 SIMBAD 区域：'{coordinates}'，半径 '{radius}'..."),
    ("Fetching SIMBAD field list...", "正在获取 SIMBAD 字段列表..."),
    ("Waiting for SIMBAD...", "等待 SIMBAD 响应..."),
    ("SIMBAD object query", "SIMBAD 天体查询"),
    ("SIMBAD region query", "SIMBAD 区域查询"),
    ("SIMBAD list fields", "SIMBAD 字段列表"),
    ("SIMBAD data for {name}", "{name} 的 SIMBAD 数据"),
    ("SIMBAD region results", "SIMBAD 区域查询结果"),
    ("SIMBAD basic table fields", "SIMBAD basic 表字段"),
    ("Found {count} result(s) from SIMBAD.", "从 SIMBAD 找到 {count} 条结果。"),
    ("Found {count} field(s).", "找到 {count} 个字段。"),
    ("No fields found.", "未找到字段。"),
    ("No information found for object '{name}'.", "未找到天体 '{name}' 的信息。"),
    ("No objects found in the specified region.", "指定区域内未找到天体。"),
    ("Found {count} object(s) in the specified region.", "在指定区域内找到 {count} 个天体。"),
    // ALMA
    ("Query ALMA observations of a named object.", "查询指定天体的 ALMA 观测。"),
    ("Query ALMA observations around a position.", "查询某位置周围的 ALMA 观测。"),
    ("Querying ALMA for object: {name}...", "正在查询 ALMA 天体：{name}..."),
    ("Querying ALMA for region: '{coordinates}' with radius '{radius}'...", "正在查询 ALMA 区域：'{coordinates}'，半径 '{radius}'..."),
    ("Waiting for ALMA...", "等待 ALMA 响应..."),
    ("ALMA object query", "ALMA 天体查询"),
    ("ALMA region query", "ALMA 区域查询"),
    ("ALMA observations of {name}", "{name} 的 ALMA 观测"),
    ("ALMA region results", "ALMA 区域查询结果"),
    ("Found {count} observation(s) in the ALMA archive.", "在 ALMA 档案中找到 {count} 条观测。"),
    ("No ALMA observations found for '{name}'.", "未找到 '{name}' 的 ALMA 观测。"),
    ("No ALMA observations found in the specified region.", "指定区域内未找到 ALMA 观测。"),
    // ESASky
    ("List the catalogs available in ESASky.", "列出 ESASky 中可用的星表。"),
    ("List the observation (map) tables available in ESASky.", "列出 ESASky 中可用的观测（天图）表。"),
    ("Query an ESASky catalog around a position.", "查询某位置周围的 ESASky 星表。"),
    ("Catalog table to search (see list-catalogs).", "要检索的星表（参见 list-catalogs）。"),
    ("Name of the right ascension column.", "赤经列名。"),
    ("Name of the declination column.", "赤纬列名。"),
    ("Fetching ESASky catalog list...", "正在获取 ESASky 星表列表..."),
    ("Fetching ESASky map list...", "正在获取 ESASky 天图列表..."),
    ("Querying ESASky catalog '{catalog}' for region: '{coordinates}' with radius '{radius}'...", "正在查询 ESASky 星表 '{catalog}' 的区域：'{coordinates}'，半径 '{radius}'..."),
    ("Waiting for ESASky...", "等待 ESASky 响应..."),
    ("ESASky list catalogs", "ESASky 星表列表"),
    ("ESASky list maps", "ESASky 天图列表"),
    ("ESASky region query", "ESASky 区域查询"),
    ("ESASky catalogs", "ESASky 星表"),
    ("ESASky maps", "ESASky 天图"),
    ("ESASky: {catalog}", "ESASky：{catalog}"),
    ("Found {count} map table(s).", "找到 {count} 个天图表。"),
    ("No maps found.", "未找到天图。"),
    // Gaia
    ("Cone search in Gaia DR3.", "在 Gaia DR3 中进行锥形检索。"),
    ("Query Gaia DR3 sources around a named object.", "查询指定天体周围的 Gaia DR3 源。"),
    ("Run an ADQL query against the Gaia archive.", "在 Gaia 档案上执行 ADQL 查询。"),
    ("ADQL query text.", "ADQL 查询语句。"),
    ("Performing Gaia cone search around '{coordinates}' with radius '{radius}'...", "正在 '{coordinates}' 周围进行 Gaia 锥形检索，半径 '{radius}'..."),
    ("Querying Gaia for object: {name}...", "正在查询 Gaia 天体：{name}..."),
    ("Running ADQL query on the Gaia archive...", "正在 Gaia 档案上执行 ADQL 查询..."),
    ("Waiting for Gaia...", "等待 Gaia 响应..."),
    ("Gaia cone search", "Gaia 锥形检索"),
    ("Gaia object query", "Gaia 天体查询"),
    ("Gaia ADQL query", "Gaia ADQL 查询"),
    ("Gaia cone search results", "Gaia 锥形检索结果"),
    ("Gaia sources near {name}", "{name} 附近的 Gaia 源"),
    ("Gaia ADQL results", "Gaia ADQL 查询结果"),
    ("Found {count} source(s) in Gaia.", "在 Gaia 中找到 {count} 个源。"),
    ("Query returned {count} row(s).", "查询返回 {count} 行。"),
    ("No Gaia sources found in the specified region.", "指定区域内未找到 Gaia 源。"),
    ("No Gaia sources found near '{name}'.", "'{name}' 附近未找到 Gaia 源。"),
    // HEASARC
    ("Perform a query on HEASARC.", "在 HEASARC 上执行查询。"),
    ("List available HEASARC missions.", "列出可用的 HEASARC 任务。"),
    ("HEASARC mission table (e.g., 'chanmaster', 'xmmmaster').", "HEASARC 任务表（例如 'chanmaster'、'xmmmaster'）。"),
    ("Right Ascension in degrees.", "赤经（度）。"),
    ("Declination in degrees.", "赤纬（度）。"),
    ("Search radius in degrees (for cone search).", "搜索半径（度，用于锥形检索）。"),
    ("Querying HEASARC mission: {mission}...", "正在查询 HEASARC 任务：{mission}..."),
    ("Listing HEASARC missions...", "正在列出 HEASARC 任务..."),
    ("Waiting for HEASARC...", "等待 HEASARC 响应..."),
    ("HEASARC query", "HEASARC 查询"),
    ("HEASARC list missions", "HEASARC 任务列表"),
    ("HEASARC Query Results", "HEASARC 查询结果"),
    ("Available HEASARC Missions", "可用的 HEASARC 任务"),
    ("Found {count} result(s) from HEASARC.", "从 HEASARC 找到 {count} 条结果。"),
    ("Found {count} mission table(s).", "找到 {count} 个任务表。"),
    ("No results found for your HEASARC query.", "HEASARC 查询没有结果。"),
    ("No HEASARC missions found.", "未找到 HEASARC 任务。"),
    // IRSA
    ("Query a specific catalog in IRSA using Gator.", "使用 Gator 查询 IRSA 中的指定星表。"),
    ("Perform a cone search across multiple IRSA collections.", "在多个 IRSA 数据集中进行锥形检索。"),
    ("List available catalogs in IRSA Gator for a mission.", "列出某任务在 IRSA Gator 中可用的星表。"),
    ("Name of the IRSA catalog (e.g., 'allwise_p3as_psd').", "IRSA 星表名称（例如 'allwise_p3as_psd'）。"),
    ("Specify a collection (e.g., 'allwise', '2MASS'). Leave blank for a general search.", "指定数据集（例如 'allwise'、'2MASS'），留空则进行通用检索。"),
    ("Filter catalogs by mission code (e.g., 'WISE', 'SPITZER').", "按任务代码筛选星表（例如 'WISE'、'SPITZER'）。"),
    ("Querying IRSA catalog '{catalog}' via Gator for region: '{coordinates}' with radius '{radius}'...", "正在通过 Gator 查询 IRSA 星表 '{catalog}' 的区域：'{coordinates}'，半径 '{radius}'..."),
    ("Performing IRSA cone search for region: '{coordinates}' with radius '{radius}'...", "正在对区域 '{coordinates}' 进行 IRSA 锥形检索，半径 '{radius}'..."),
    ("Fetching list of available IRSA Gator catalogs {mission_info}...", "正在获取可用的 IRSA Gator 星表列表 {mission_info}..."),
    ("for mission {mission}", "（任务 {mission}）"),
    (" in collection {collection}", "（数据集 {collection}）"),
    ("Waiting for IRSA...", "等待 IRSA 响应..."),
    ("IRSA Gator query for catalog {catalog}", "IRSA Gator 星表 {catalog} 查询"),
    ("IRSA query_region", "IRSA 区域查询"),
    ("IRSA list_gator_catalogs", "IRSA Gator 星表列表"),
    ("IRSA Gator: {catalog}", "IRSA Gator：{catalog}"),
    ("IRSA Cone Search Results", "IRSA 锥形检索结果"),
    ("IRSA catalogs", "IRSA 星表"),
    ("Found {count} match(es) in '{catalog}'.", "在 '{catalog}' 中找到 {count} 条匹配。"),
    ("Found {count} match(es) in IRSA holdings.", "在 IRSA 馆藏中找到 {count} 条匹配。"),
    ("Found {count} catalog(s).", "找到 {count} 个星表。"),
    ("No information found in '{catalog}' for the specified region.", "在 '{catalog}' 的指定区域内未找到信息。"),
    ("No information found in IRSA for the specified region{collection_info}.", "在 IRSA 的指定区域内未找到信息{collection_info}。"),
    ("No catalogs found.", "未找到星表。"),
    // IRSA dust
    ("Query E(B-V) reddening, emission and dust temperature statistics.", "查询 E(B-V) 红化、辐射和尘埃温度统计。"),
    ("Query the per-band extinction table at a position.", "查询某位置的各波段消光表。"),
    ("Size of the region (2 to 37.5 degrees, default 5 degrees).", "区域大小（2 到 37.5 度，默认 5 度）。"),
    ("Querying IRSA dust maps at '{coordinates}'...", "正在查询 '{coordinates}' 处的 IRSA 尘埃图..."),
    ("Querying IRSA extinction table at '{coordinates}'...", "正在查询 '{coordinates}' 处的 IRSA 消光表..."),
    ("IRSA dust query", "IRSA 尘埃查询"),
    ("IRSA extinction query", "IRSA 消光查询"),
    ("Dust statistics at {coordinates}", "{coordinates} 处的尘埃统计"),
    ("Extinction at {coordinates}", "{coordinates} 处的消光"),
    ("Found {count} statistic(s).", "找到 {count} 项统计。"),
    ("Found {count} band(s).", "找到 {count} 个波段。"),
    ("No dust statistics returned.", "没有返回尘埃统计。"),
    ("No extinction data returned.", "没有返回消光数据。"),
    // JPL Horizons
    ("Observer ephemerides of a target.", "目标的观测者星历。"),
    ("Osculating orbital elements of a target.", "目标的密切轨道根数。"),
    ("State vectors of a target.", "目标的状态矢量。"),
    ("Target body (e.g., '499' for Mars, 'Ceres', '1P').", "目标天体（例如火星为 '499'、'Ceres'、'1P'）。"),
    ("Observer location or coordinate origin (e.g., '500@399', '568').", "观测者位置或坐标原点（例如 '500@399'、'568'）。"),
    ("Start time (e.g., '2024-01-01').", "开始时间（例如 '2024-01-01'）。"),
    ("Stop time (e.g., '2024-01-10').", "结束时间（例如 '2024-01-10'）。"),
    ("Step size (e.g., '1d', '1h').", "步长（例如 '1d'、'1h'）。"),
    ("ephemerides", "星历"),
    ("orbital elements", "轨道根数"),
    ("state vectors", "状态矢量"),
    ("Querying JPL Horizons {kind} for target: {target}...", "正在查询目标 {target} 的 JPL Horizons {kind}..."),
    ("Waiting for JPL Horizons...", "等待 JPL Horizons 响应..."),
    ("JPL Horizons query", "JPL Horizons 查询"),
    ("JPL Horizons {kind}: {target}", "JPL Horizons {kind}：{target}"),
    ("Found {count} row(s) from JPL Horizons.", "从 JPL Horizons 获得 {count} 行。"),
    ("No {kind} returned for '{target}'.", "没有返回 '{target}' 的{kind}。"),
    // JPL SBDB
    ("Look up a small body (asteroid or comet).", "查询小天体（小行星或彗星）。"),
    ("Name, number or designation (e.g., 'Ceres', '433', '2024 AB').", "名称、编号或暂定名（例如 'Ceres'、'433'、'2024 AB'）。"),
    ("Include physical parameters.", "包含物理参数。"),
    ("Include discovery circumstances.", "包含发现信息。"),
    ("Querying JPL SBDB for: {target}...", "正在查询 JPL SBDB：{target}..."),
    ("Waiting for JPL SBDB...", "等待 JPL SBDB 响应..."),
    ("JPL SBDB query", "JPL SBDB 查询"),
    ("'{target}' matches several objects; use one of the designations below.", "'{target}' 匹配多个天体，请使用下列暂定名之一。"),
    ("Object summary", "天体概要"),
    ("Physical parameters", "物理参数"),
    ("Discovery", "发现信息"),
    ("Orbital elements", "轨道根数"),
    ("Found {count} orbital element(s).", "找到 {count} 个轨道根数。"),
    ("No orbital elements available.", "没有可用的轨道根数。"),
    // MAST
    ("Query MAST observations of a named object.", "查询指定天体的 MAST 观测。"),
    ("Query MAST observations around a position.", "查询某位置周围的 MAST 观测。"),
    ("Querying MAST for object: {name}...", "正在查询 MAST 天体：{name}..."),
    ("Querying MAST for region: '{coordinates}' with radius '{radius}'...", "正在查询 MAST 区域：'{coordinates}'，半径 '{radius}'..."),
    ("Waiting for MAST...", "等待 MAST 响应..."),
    ("MAST object query", "MAST 天体查询"),
    ("MAST region query", "MAST 区域查询"),
    ("MAST observations of {name}", "{name} 的 MAST 观测"),
    ("MAST region results", "MAST 区域查询结果"),
    ("Found {count} observation(s) in MAST.", "在 MAST 中找到 {count} 条观测。"),
    ("No MAST observations found for '{name}'.", "未找到 '{name}' 的 MAST 观测。"),
    ("No MAST observations found in the specified region.", "指定区域内未找到 MAST 观测。"),
    // NASA ADS
    ("Search the ADS literature database.", "检索 ADS 文献数据库。"),
    ("ADS query string (e.g., 'author:\"Hubble, E\" year:1929').", "ADS 查询字符串（例如 'author:\"Hubble, E\" year:1929'）。"),
    ("Number of records to return.", "返回的记录数。"),
    ("Sort order (e.g., 'date desc', 'citation_count desc').", "排序方式（例如 'date desc'、'citation_count desc'）。"),
    ("Fields to return (repeatable or comma separated).", "要返回的字段（可重复或以逗号分隔）。"),
    ("Querying NASA ADS: {query}...", "正在查询 NASA ADS：{query}..."),
    ("Waiting for NASA ADS...", "等待 NASA ADS 响应..."),
    ("NASA ADS query", "NASA ADS 查询"),
    ("NASA ADS results", "NASA ADS 查询结果"),
    ("Showing {count} of {total} record(s).", "显示 {total} 条记录中的 {count} 条。"),
    ("No records found for '{query}'.", "未找到 '{query}' 的记录。"),
    // NED
    ("Query NED for an object by name.", "按名称在 NED 中查询天体。"),
    ("Query NED objects around a position.", "查询某位置周围的 NED 天体。"),
    ("Querying NED for object: {name}...", "正在查询 NED 天体：{name}..."),
    ("Querying NED for region: '{coordinates}' with radius '{radius}'...", "正在查询 NED 区域：'{coordinates}'，半径 '{radius}'..."),
    ("Waiting for NED...", "等待 NED 响应..."),
    ("NED object query", "NED 天体查询"),
    ("NED region query", "NED 区域查询"),
    ("NED data for {name}", "{name} 的 NED 数据"),
    ("NED region results", "NED 区域查询结果"),
    ("Found {count} result(s) from NED.", "从 NED 找到 {count} 条结果。"),
    // Splatalogue
    ("Query spectral lines in a frequency range.", "查询频率范围内的谱线。"),
    ("Lower frequency bound in GHz.", "频率下限（GHz）。"),
    ("Upper frequency bound in GHz.", "频率上限（GHz）。"),
    ("Restrict to one species (e.g., 'CO').", "仅限一种分子或原子（例如 'CO'）。"),
    ("Querying Splatalogue for lines between {min} and {max} GHz...", "正在查询 {min} 到 {max} GHz 之间的 Splatalogue 谱线..."),
    ("Waiting for Splatalogue...", "等待 Splatalogue 响应..."),
    ("Splatalogue query", "Splatalogue 查询"),
    ("Splatalogue spectral lines", "Splatalogue 谱线"),
    ("Found {count} spectral line(s).", "找到 {count} 条谱线。"),
    ("No spectral lines found in the given range.", "给定范围内未找到谱线。"),
    // VizieR
    ("Query a VizieR catalog around a named object.", "查询指定天体周围的 VizieR 星表。"),
    ("Query a VizieR catalog around a position.", "查询某位置周围的 VizieR 星表。"),
    ("Find VizieR catalogs whose description matches a keyword.", "查找描述匹配关键字的 VizieR 星表。"),
    ("VizieR catalog identifier (e.g., 'I/239/hip_main').", "VizieR 星表标识（例如 'I/239/hip_main'）。"),
    ("Keyword to search for (e.g., 'Hipparcos').", "要搜索的关键字（例如 'Hipparcos'）。"),
    ("Querying VizieR catalog '{catalog}' for object: {name}...", "正在查询 VizieR 星表 '{catalog}' 中的天体：{name}..."),
    ("Querying VizieR catalog '{catalog}' for region: '{coordinates}' with radius '{radius}'...", "正在查询 VizieR 星表 '{catalog}' 的区域：'{coordinates}'，半径 '{radius}'..."),
    ("Searching VizieR catalogs for: {keyword}...", "正在搜索 VizieR 星表：{keyword}..."),
    ("Waiting for VizieR...", "等待 VizieR 响应..."),
    ("VizieR object query", "VizieR 天体查询"),
    ("VizieR region query", "VizieR 区域查询"),
    ("VizieR catalog search", "VizieR 星表搜索"),
    ("VizieR: {catalog}", "VizieR：{catalog}"),
    ("VizieR catalogs", "VizieR 星表"),
    ("No sources found in '{catalog}' near '{name}'.", "在 '{catalog}' 中 '{name}' 附近未找到源。"),
    ("No sources found in '{catalog}' for the specified region.", "在 '{catalog}' 的指定区域内未找到源。"),
    ("No catalogs found matching '{keyword}'.", "未找到匹配 '{keyword}' 的星表。"),
];

static CATALOG: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| ZH.iter().copied().collect());

pub fn zh(msgid: &str) -> Option<&'static str> {
    CATALOG.get(msgid).copied()
}

pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    ZH.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_msgids() {
        assert_eq!(CATALOG.len(), ZH.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(zh("Status"), Some("状态"));
        assert_eq!(zh("not translated"), None);
    }
}
